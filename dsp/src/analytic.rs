//! Real to analytic signal conversion.
//!
//! The analytic signal of `x` is `x + i·H[x]`, where `H` is the Hilbert
//! transform. [`FftAnalytic`] computes it in the frequency domain over the
//! whole signal at once: negative frequencies are removed and positive ones
//! doubled, so the real part is preserved and the imaginary part is the
//! quadrature companion.

use num_complex::Complex;
use rustfft::FftPlanner;
use thiserror::Error;

use crate::iq::IQ;
use crate::math::Real;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticError {
    #[error("cannot transform an empty signal")]
    Empty,

    #[error("sample {index} is not finite")]
    NonFinite { index: usize },
}

/// Something that turns a real signal into a complex analytic signal.
///
/// Implementations must return exactly `real.len()` samples.
pub trait AnalyticSignal {
    fn analytic(&self, real: &[Real]) -> Result<Vec<IQ>, AnalyticError>;
}

/// Analytic signal by FFT over the full signal length.
///
/// Any length is accepted; `rustfft` plans mixed-radix and Bluestein
/// transforms for sizes that are not powers of two.
#[derive(Debug, Clone, Copy, Default)]
pub struct FftAnalytic;

impl FftAnalytic {
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticSignal for FftAnalytic {
    fn analytic(&self, real: &[Real]) -> Result<Vec<IQ>, AnalyticError> {
        let len = real.len();
        if len == 0 {
            return Err(AnalyticError::Empty);
        }
        if let Some(index) = real.iter().position(|x| !x.is_finite()) {
            return Err(AnalyticError::NonFinite { index });
        }

        let mut planner = FftPlanner::<Real>::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);

        let mut buffer: Vec<Complex<Real>> = real.iter().map(|&x| Complex::new(x, 0.0)).collect();
        forward.process(&mut buffer);

        // DC (and Nyquist, for even lengths) keep unit weight. Positive
        // frequencies are doubled and negative ones removed.
        let positive_end = (len + 1) / 2;
        for bin in &mut buffer[1..positive_end] {
            *bin *= 2.0;
        }
        let negative_start = len / 2 + 1;
        for bin in &mut buffer[negative_start..] {
            *bin = Complex::new(0.0, 0.0);
        }

        inverse.process(&mut buffer);

        let scale = 1.0 / len as Real;
        let output: Vec<IQ> = buffer.into_iter().map(|z| IQ::from(z * scale)).collect();
        if let Some(index) = output.iter().position(|z| !z.is_finite()) {
            return Err(AnalyticError::NonFinite { index });
        }
        Ok(output)
    }
}
