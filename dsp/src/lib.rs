//! Instantaneous frequency estimation with an adaptive LMS linear predictor.
//!
//! ```
//! use lmsif_dsp::{iq::IQ, lms_if, wave::Phasor};
//!
//! let mut tone = vec![IQ::ZERO; 2000];
//! Phasor::new(0.2).fill(&mut tone);
//! let (real, imag): (Vec<f64>, Vec<f64>) = tone.iter().map(|z| (z.i, z.q)).unzip();
//!
//! let estimate = lms_if(&real, Some(imag.as_slice()), 0.01).unwrap();
//! assert!((estimate.frequencies[1999] - 0.2).abs() < 1e-3);
//! ```

pub mod analytic;
pub mod error;
pub mod estimate;
pub mod iq;
pub mod lms;
pub mod math;
pub mod progress;
pub mod signal;
pub mod wave;

pub use error::{Error, Result};
pub use estimate::{lms_if, Estimate, Estimator};
pub use signal::Signal;
