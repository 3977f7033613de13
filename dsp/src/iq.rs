use std::ops;

use num_complex::Complex;

use crate::math::{atan2, cos, sin, Real};

/// A complex sample, in-phase (`i`) and quadrature (`q`) parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IQ {
    pub i: Real,
    pub q: Real,
}

impl IQ {
    pub const ZERO: Self = Self { i: 0.0, q: 0.0 };

    pub fn new(i: Real, q: Real) -> Self {
        Self { i, q }
    }

    pub fn new_polar(phase: Real, magnitude: Real) -> Self {
        Self {
            i: magnitude * cos(phase),
            q: magnitude * sin(phase),
        }
    }

    /// Four-quadrant angle in `(-PI, PI]`.
    pub fn phase(&self) -> Real {
        atan2(self.q, self.i)
    }

    pub fn conj(&self) -> IQ {
        Self {
            i: self.i,
            q: -self.q,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.i.is_finite() && self.q.is_finite()
    }
}

impl ops::Add for IQ {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            q: self.q + rhs.q,
        }
    }
}

impl ops::Sub for IQ {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            q: self.q - rhs.q,
        }
    }
}

impl ops::Mul for IQ {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i * rhs.i - self.q * rhs.q,
            q: self.i * rhs.q + self.q * rhs.i,
        }
    }
}

impl ops::Mul<Real> for IQ {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self::Output {
        Self {
            i: self.i * rhs,
            q: self.q * rhs,
        }
    }
}

impl From<Complex<Real>> for IQ {
    fn from(value: Complex<Real>) -> Self {
        IQ::new(value.re, value.im)
    }
}

impl From<IQ> for Complex<Real> {
    fn from(value: IQ) -> Self {
        Complex::new(value.i, value.q)
    }
}
