use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::Parser;
use hound::{WavSpec, WavWriter};
use lmsif_dsp::{iq::IQ, math::Real, wave::Chirp};
use tracing_subscriber::EnvFilter;

/// Write a linear FM test signal to a 16-bit WAV file.
///
/// A tone is a chirp with equal start and end frequencies.
#[derive(Parser, Debug)]
struct Args {
    /// Output WAV path.
    #[arg(default_value = "chirp.wav")]
    output: PathBuf,

    #[arg(long, default_value_t = 8000)]
    sample_rate: u32,

    /// Length in seconds.
    #[arg(long, default_value_t = 2.0)]
    duration: Real,

    /// Start frequency in Hz.
    #[arg(long, default_value_t = 500.0)]
    start: Real,

    /// End frequency in Hz.
    #[arg(long, default_value_t = 3000.0)]
    end: Real,

    #[arg(long, default_value_t = 0.5)]
    amplitude: Real,

    /// Write two channels holding the I and Q parts instead of a mono signal.
    #[arg(long)]
    iq: bool,

    /// Default log level when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let nyquist = args.sample_rate as Real / 2.0;
    ensure!(
        (0.0..nyquist).contains(&args.start) && (0.0..nyquist).contains(&args.end),
        "frequencies must lie in [0, {}) Hz",
        nyquist
    );
    ensure!(args.duration > 0.0, "duration must be positive");

    let len = (args.duration * args.sample_rate as Real).round() as usize;
    let sample_rate = args.sample_rate as Real;
    let mut chirp = Chirp::spanning(args.start / sample_rate, args.end / sample_rate, len);

    let num_channels = if args.iq { 2 } else { 1 };
    let mut writer = WavWriter::new(
        BufWriter::new(
            File::create(&args.output)
                .with_context(|| format!("cannot create `{}`", args.output.display()))?,
        ),
        WavSpec {
            channels: num_channels,
            sample_rate: args.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        },
    )
    .context("cannot write wav file")?;

    tracing::info!(
        path = %args.output.display(),
        len,
        start_hz = args.start,
        end_hz = args.end,
        iq = args.iq,
        "writing chirp"
    );

    let convert = |x: Real| (args.amplitude * x * i16::MAX as Real) as i16;
    let chunk_len = args.sample_rate as usize / 100 + 1;
    let mut mono = vec![0.0; chunk_len];
    let mut iq = vec![IQ::ZERO; chunk_len];
    let mut remaining = len;
    while remaining > 0 {
        let count = remaining.min(chunk_len);
        if args.iq {
            chirp.fill_iq(&mut iq[..count]);
            for sample in &iq[..count] {
                writer.write_sample(convert(sample.i))?;
                writer.write_sample(convert(sample.q))?;
            }
        } else {
            chirp.fill(&mut mono[..count]);
            for &sample in &mono[..count] {
                writer.write_sample(convert(sample))?;
            }
        }
        remaining -= count;
    }

    writer.flush()?;
    writer.finalize()?;
    Ok(())
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
