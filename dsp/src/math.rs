pub type Real = f64;

#[doc(inline)]
pub use std::f64::consts::*;

/// `Real::sin` as a free function, so phase formulas read as `sin(TAU * f * n)`.
pub fn sin(x: Real) -> Real {
    x.sin()
}

/// `Real::cos` as a free function.
pub fn cos(x: Real) -> Real {
    x.cos()
}

/// Wrapper around `Real::atan`. Two-quadrant only; see `half_wrap_frequency`.
pub fn atan(x: Real) -> Real {
    x.atan()
}

/// Wrapper around `Real::atan2`.
pub fn atan2(y: Real, x: Real) -> Real {
    y.atan2(x)
}

/// Map the angle of the vector `(x, y)` to a normalized frequency in
/// `[0, 0.5)` cycles/sample.
///
/// This is *not* `atan2`: the angle is taken with the two-quadrant `atan` of
/// `y / x` and folded into `[0, PI)` by adding `PI` to negative results, so a
/// vector and its negation map to the same frequency.
///
/// - `x == 0` with `y != 0` divides to an infinity and yields `0.25`.
/// - `x == 0` and `y == 0` divides to NaN, which is returned as-is.
pub fn half_wrap_frequency(y: Real, x: Real) -> Real {
    let mut phase = atan(y / x);
    if phase < 0.0 {
        phase += PI;
    }
    phase / TAU
}
