use crate::analytic::AnalyticSignal;
use crate::error::{Error, Result};
use crate::iq::IQ;
use crate::math::Real;

/// Input to the estimator.
///
/// A real-only signal has to go through an [`AnalyticSignal`] provider
/// before the predictor can run on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    RealOnly(Vec<Real>),
    Complex(Vec<IQ>),
}

impl Signal {
    /// Build a signal from a real part and an optional imaginary part.
    pub fn from_parts(real: &[Real], imag: Option<&[Real]>) -> Result<Self> {
        if real.is_empty() {
            return Err(Error::EmptySignal);
        }
        match imag {
            None => Ok(Signal::RealOnly(real.to_vec())),
            Some(imag) if imag.len() != real.len() => Err(Error::LengthMismatch {
                real: real.len(),
                imag: imag.len(),
            }),
            Some(imag) => Ok(Signal::Complex(
                real.iter()
                    .zip(imag)
                    .map(|(&i, &q)| IQ::new(i, q))
                    .collect(),
            )),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Signal::RealOnly(samples) => samples.len(),
            Signal::Complex(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Signal::Complex(_))
    }

    /// The complex samples, calling `provider` once if only the real part is
    /// known.
    pub fn into_complex(self, provider: &impl AnalyticSignal) -> Result<Vec<IQ>> {
        match self {
            Signal::Complex(samples) => Ok(samples),
            Signal::RealOnly(samples) => {
                let analytic = provider.analytic(&samples)?;
                debug_assert_eq!(analytic.len(), samples.len());
                Ok(analytic)
            }
        }
    }
}

impl From<Vec<IQ>> for Signal {
    fn from(samples: Vec<IQ>) -> Self {
        Signal::Complex(samples)
    }
}

impl From<Vec<Real>> for Signal {
    fn from(samples: Vec<Real>) -> Self {
        Signal::RealOnly(samples)
    }
}
