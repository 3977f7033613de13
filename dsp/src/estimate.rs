use crate::analytic::{AnalyticSignal, FftAnalytic};
use crate::error::{Error, Result};
use crate::lms::{estimate_into, Diagnostics};
use crate::math::Real;
use crate::progress::Progress;
use crate::signal::Signal;

/// Settings for an instantaneous frequency estimate.
///
/// ```
/// # use lmsif_dsp::estimate::Estimator;
/// let estimator = Estimator {
///     mu: 0.05,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Estimator<P = FftAnalytic> {
    /// Adaptation step size. Small values track slowly and smoothly, large
    /// values track quickly but noisily and may diverge. Only finiteness is
    /// checked.
    pub mu: Real,
    /// Value placed at index 0 of the result, which the predictor never
    /// writes.
    pub initial_value: Real,
    /// Used when the signal has no imaginary part.
    pub provider: P,
}

impl Default for Estimator {
    fn default() -> Self {
        Self {
            mu: 0.01,
            initial_value: 0.0,
            provider: FftAnalytic::new(),
        }
    }
}

/// Per-sample normalized frequency estimates, in cycles per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub frequencies: Vec<Real>,
    pub diagnostics: Diagnostics,
}

impl Estimate {
    /// The estimates scaled to Hz.
    pub fn to_hz(&self, sample_rate: Real) -> Vec<Real> {
        self.frequencies.iter().map(|f| f * sample_rate).collect()
    }
}

impl<P: AnalyticSignal> Estimator<P> {
    pub fn estimate(&self, signal: Signal) -> Result<Estimate> {
        self.estimate_with_progress(signal, &mut ())
    }

    pub fn estimate_with_progress(
        &self,
        signal: Signal,
        progress: &mut impl Progress,
    ) -> Result<Estimate> {
        if signal.is_empty() {
            return Err(Error::EmptySignal);
        }
        if !self.mu.is_finite() {
            return Err(Error::NonFiniteStepSize(self.mu));
        }

        let complex = signal.is_complex();
        let samples = signal.into_complex(&self.provider)?;
        tracing::debug!(len = samples.len(), mu = self.mu, complex, "estimating frequency");

        let mut frequencies = vec![self.initial_value; samples.len()];
        let diagnostics = estimate_into(&samples, self.mu, &mut frequencies, progress);

        if diagnostics.degenerate_steps > 0 {
            tracing::warn!(
                degenerate_steps = diagnostics.degenerate_steps,
                "predictor coefficient collapsed to zero, estimates contain NaN"
            );
        }
        tracing::debug!(steps = diagnostics.steps, "estimate complete");

        Ok(Estimate {
            frequencies,
            diagnostics,
        })
    }
}

/// Estimate the instantaneous frequency of `real + i * imag` with step size
/// `mu`, using the default analytic signal provider when `imag` is absent.
pub fn lms_if(real: &[Real], imag: Option<&[Real]>, mu: Real) -> Result<Estimate> {
    let signal = Signal::from_parts(real, imag)?;
    Estimator {
        mu,
        ..Default::default()
    }
    .estimate(signal)
}
