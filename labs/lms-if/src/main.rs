use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use hound::{SampleFormat, WavReader};
use lmsif_dsp::{math::Real, progress::LogProgress, Estimator, Signal};
use tracing_subscriber::EnvFilter;

/// Track the instantaneous frequency of a WAV recording with an adaptive LMS
/// predictor and write it out as CSV.
#[derive(Parser, Debug)]
struct Args {
    /// Input WAV file.
    input: PathBuf,

    /// Output CSV path.
    #[arg(short, long, default_value = "frequency.csv")]
    output: PathBuf,

    /// Adaptation step size.
    #[arg(long, default_value_t = 0.01)]
    mu: Real,

    /// Value written for the first sample, which has no estimate.
    #[arg(long, default_value_t = 0.0)]
    initial: Real,

    /// How to interpret the channels of the input file.
    #[arg(long, value_enum, default_value_t = ChannelMode::First)]
    channel_mode: ChannelMode,

    /// Default log level when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ChannelMode {
    /// Use the first channel as a real signal.
    First,
    /// Use the first two channels as in-phase and quadrature parts.
    Iq,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let reader = WavReader::open(&args.input)
        .with_context(|| format!("cannot open `{}`", args.input.display()))?;
    let (sample_rate, channels) = read_channels(reader)?;
    let signal = match (args.channel_mode, channels.as_slice()) {
        (ChannelMode::First, [first, ..]) => Signal::from_parts(first, None)?,
        (ChannelMode::Iq, [i, q, ..]) => Signal::from_parts(i, Some(q.as_slice()))?,
        (ChannelMode::Iq, _) => bail!("I/Q mode needs at least two channels"),
        (ChannelMode::First, []) => bail!("input has no channels"),
    };

    tracing::info!(
        path = %args.input.display(),
        sample_rate,
        len = signal.len(),
        mu = args.mu,
        "read input"
    );

    let estimator = Estimator {
        mu: args.mu,
        initial_value: args.initial,
        ..Default::default()
    };
    let estimate = estimator
        .estimate_with_progress(signal, &mut LogProgress::new())
        .context("frequency estimation failed")?;

    let hz_track = estimate.to_hz(sample_rate as Real);
    let mut out = BufWriter::new(
        File::create(&args.output)
            .with_context(|| format!("cannot create `{}`", args.output.display()))?,
    );
    writeln!(out, "index,normalized,hz")?;
    for (index, (normalized, hz)) in estimate.frequencies.iter().zip(&hz_track).enumerate() {
        writeln!(out, "{},{},{}", index, normalized, hz)?;
    }
    out.flush()?;

    tracing::info!(
        path = %args.output.display(),
        steps = estimate.diagnostics.steps,
        degenerate_steps = estimate.diagnostics.degenerate_steps,
        "wrote frequency track"
    );
    Ok(())
}

/// Split a WAV stream into per-channel sample vectors scaled to `[-1, 1]`.
fn read_channels<R: Read>(reader: WavReader<R>) -> anyhow::Result<(u32, Vec<Vec<Real>>)> {
    let spec = reader.spec();
    let num_channels = spec.channels as usize;

    let interleaved: Vec<Real> = match spec.sample_format {
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as Real;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| s as Real / scale))
                .collect::<Result<_, _>>()?
        }
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(Real::from))
            .collect::<Result<_, _>>()?,
    };

    let mut channels = vec![Vec::with_capacity(interleaved.len() / num_channels); num_channels];
    for frame in interleaved.chunks_exact(num_channels) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
    Ok((spec.sample_rate, channels))
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
