//! Instantaneous frequency by adaptive linear prediction.
//!
//! A single complex coefficient `c` predicts each sample from the one before
//! it. The prediction error is
//!
//! ```text
//! e(n) = c(n) * x(n) + x(n+1)
//! ```
//!
//! and the coefficient follows the instantaneous gradient of `|e|^2`:
//!
//! ```text
//! c(n+1) = c(n) - 2 * mu * e(n) * conj(x(n))
//! ```
//!
//! For a tone `x(n) = exp(i * TAU * f * n)` the coefficient settles at
//! `-exp(i * TAU * f)`, so its angle (see [`half_wrap_frequency`]) recovers `f`.
//! On a unit-magnitude signal the distance to that fixed point shrinks by
//! `1 - 2 * mu` each step.
//!
//! The frequency mapping uses the two-quadrant `atan`, folded into `[0, PI)`,
//! rather than `atan2`. Estimates therefore lie in `[0, 0.5)` and cannot tell
//! a frequency from its negation.

use crate::iq::IQ;
use crate::math::{half_wrap_frequency, Real};
use crate::progress::Progress;

/// The outcome of one predictor update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Coefficient after the update.
    pub coeff: IQ,
    /// Prediction error that drove the update.
    pub error: IQ,
    /// Normalized frequency read from the updated coefficient.
    pub frequency: Real,
}

impl Step {
    /// The coefficient collapsed to exactly zero and `frequency` is NaN.
    pub fn is_degenerate(&self) -> bool {
        self.coeff == IQ::ZERO
    }
}

/// Summary of a run of [`estimate_into`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    /// Number of predictor updates, `N - 1`.
    pub steps: usize,
    /// Updates that left the coefficient at zero.
    pub degenerate_steps: usize,
    /// Coefficient after the last update (the first sample if there were none).
    pub final_coeff: IQ,
}

/// Update `coeff` using the pair of consecutive samples `current`, `next`.
pub fn step(coeff: IQ, current: IQ, next: IQ, mu: Real) -> Step {
    let error = coeff * current + next;
    let coeff = coeff - error * current.conj() * (2.0 * mu);
    Step {
        coeff,
        error,
        frequency: half_wrap_frequency(coeff.q, coeff.i),
    }
}

/// Run the predictor over `signal` and write the estimates to
/// `result[1..]`.
///
/// `result[0]` is left untouched, it belongs to the caller. The coefficient
/// starts at `signal[0]`. Each step depends on the previous one, so this is
/// a single forward pass. `progress` receives `(n + 1) / (N - 1)` after
/// step `n`.
///
/// Nothing is validated here: a non-finite `mu` or a degenerate coefficient
/// simply yields NaN estimates.
///
/// # Panics
///
/// Panics if `signal` is empty or `result.len() != signal.len()`.
pub fn estimate_into(
    signal: &[IQ],
    mu: Real,
    result: &mut [Real],
    progress: &mut impl Progress,
) -> Diagnostics {
    assert_eq!(signal.len(), result.len());
    let steps = signal.len() - 1;

    let (final_coeff, degenerate_steps) = signal
        .windows(2)
        .zip(&mut result[1..])
        .enumerate()
        .fold((signal[0], 0), |(coeff, degenerate), (n, (pair, out))| {
            let update = step(coeff, pair[0], pair[1], mu);
            *out = update.frequency;
            progress.report((n + 1) as Real / steps as Real);
            (update.coeff, degenerate + update.is_degenerate() as usize)
        });

    Diagnostics {
        steps,
        degenerate_steps,
        final_coeff,
    }
}
