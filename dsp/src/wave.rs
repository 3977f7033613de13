use crate::iq::IQ;
use crate::math::{cos, Real, TAU};

/// Complex exponential `exp(i * TAU * frequency * n)`.
///
/// `frequency` is normalized, in cycles per sample.
pub struct Phasor {
    frequency: Real,
    n: u64,
}

impl Phasor {
    pub fn new(frequency: Real) -> Self {
        Self { frequency, n: 0 }
    }

    pub fn next(&mut self) -> IQ {
        // Phase is recomputed from the index so long runs don't accumulate error.
        let sample = IQ::new_polar(TAU * self.frequency * self.n as Real, 1.0);
        self.n += 1;
        sample
    }

    pub fn fill(&mut self, buffer: &mut [IQ]) {
        for slot in buffer {
            *slot = self.next();
        }
    }
}

/// Linear FM sweep.
///
/// The instantaneous frequency at sample `n` is `start + slope * n` cycles
/// per sample.
pub struct Chirp {
    start: Real,
    slope: Real,
    n: u64,
}

impl Chirp {
    pub fn new(start: Real, slope: Real) -> Self {
        Self { start, slope, n: 0 }
    }

    /// Sweep from `start` to `end` over `len` samples.
    pub fn spanning(start: Real, end: Real, len: usize) -> Self {
        let slope = if len > 1 {
            (end - start) / (len - 1) as Real
        } else {
            0.0
        };
        Self::new(start, slope)
    }

    /// Frequency of the sample that the next call will produce.
    pub fn frequency(&self) -> Real {
        self.start + self.slope * self.n as Real
    }

    fn advance(&mut self) -> Real {
        let t = self.n as Real;
        self.n += 1;
        TAU * (self.start * t + 0.5 * self.slope * t * t)
    }

    /// Next real (cosine) sample.
    pub fn next(&mut self) -> Real {
        cos(self.advance())
    }

    /// Next complex sample.
    pub fn next_iq(&mut self) -> IQ {
        IQ::new_polar(self.advance(), 1.0)
    }

    pub fn fill(&mut self, buffer: &mut [Real]) {
        for slot in buffer {
            *slot = self.next();
        }
    }

    pub fn fill_iq(&mut self, buffer: &mut [IQ]) {
        for slot in buffer {
            *slot = self.next_iq();
        }
    }
}
