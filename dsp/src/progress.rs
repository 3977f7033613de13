use crate::math::Real;

/// Receives the completed fraction of an estimation run, in `[0, 1]`.
///
/// Sinks only observe; nothing they do can change the estimate.
pub trait Progress {
    fn report(&mut self, fraction: Real);
}

/// No sink attached.
impl Progress for () {
    fn report(&mut self, _fraction: Real) {}
}

impl<F: FnMut(Real)> Progress for F {
    fn report(&mut self, fraction: Real) {
        self(fraction)
    }
}

/// Logs a `debug` event every time another tenth of the run completes.
#[derive(Debug, Default)]
pub struct LogProgress {
    reported_tenths: u32,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for LogProgress {
    fn report(&mut self, fraction: Real) {
        let tenths = (fraction * 10.0).floor() as u32;
        if tenths > self.reported_tenths {
            self.reported_tenths = tenths;
            tracing::debug!(percent = tenths * 10, "estimating frequency");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_sink_sees_every_report() {
        let mut seen = Vec::new();
        {
            let mut sink = |f: Real| seen.push(f);
            sink.report(0.5);
            sink.report(1.0);
        }
        assert_eq!(seen, vec![0.5, 1.0]);
    }

    #[test]
    fn log_progress_advances_by_tenths() {
        let mut sink = LogProgress::new();
        sink.report(0.05);
        assert_eq!(sink.reported_tenths, 0);
        sink.report(0.31);
        assert_eq!(sink.reported_tenths, 3);
        sink.report(0.2);
        assert_eq!(sink.reported_tenths, 3);
        sink.report(1.0);
        assert_eq!(sink.reported_tenths, 10);
    }
}
