use thiserror::Error;

use crate::analytic::AnalyticError;
use crate::math::Real;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the estimator entry point.
///
/// All of these are raised before the predictor loop starts; a run that
/// begins always completes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("signal is empty")]
    EmptySignal,

    #[error("real part has {real} samples but imaginary part has {imag}")]
    LengthMismatch { real: usize, imag: usize },

    #[error("step size must be finite, got {0}")]
    NonFiniteStepSize(Real),

    #[error("analytic signal could not be computed: {0}")]
    Analytic(#[from] AnalyticError),
}

impl Error {
    /// Whether this error was caused by the caller's arguments, as opposed to
    /// a failure in the analytic signal provider.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::Analytic(_))
    }
}
