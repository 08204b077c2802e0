//! Stepping through a curve at a fixed sample rate.

use crate::{Curve, Signal};

/// A [`Signal`] that samples a curve at evenly spaced x.
///
/// Each call to `next_sample()` evaluates the curve at the current position
/// and then advances it by `1 / sample_rate`. The curve is read as-is: it is
/// never looped, retriggered or rescaled.
///
/// # Examples
///
/// ```
/// use cubic_segments::{CubicSegmentCurve, CurveSignal, Signal};
///
/// let mut curve = CubicSegmentCurve::from_points([(0.0, 0.0), (1.0, 1.0)]);
/// curve.compile(false);
///
/// let mut signal = CurveSignal::new(curve, 4.0);
/// let mut buffer = [0.0; 5];
/// signal.process(&mut buffer);
/// assert_eq!(buffer, [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct CurveSignal<C: Curve> {
    curve: C,
    /// x of the next sample
    position: f64,
    /// Distance in x between samples
    step: f64,
    sample_rate: f64,
}

impl<C: Curve> CurveSignal<C> {
    /// Creates a signal starting at x = 0.
    ///
    /// `sample_rate` must be positive. Zero gives an infinite step and a
    /// negative rate walks the curve backwards.
    ///
    /// # Arguments
    ///
    /// * `curve` - Curve to sample
    /// * `sample_rate` - Samples per unit of x (e.g. 44100.0 when x is in seconds)
    pub fn new(curve: C, sample_rate: f64) -> Self {
        Self {
            curve,
            position: 0.0,
            step: 1.0 / sample_rate,
            sample_rate,
        }
    }

    /// Sets the x of the first sample.
    pub fn with_start(mut self, x: f64) -> Self {
        self.position = x;
        self
    }

    /// Moves the next sample to `x`.
    pub fn seek(&mut self, x: f64) {
        self.position = x;
    }

    /// x of the next sample.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Samples per unit of x.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// The curve being sampled.
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Returns the curve, discarding the position.
    pub fn into_inner(self) -> C {
        self.curve
    }
}

impl<C: Curve> Signal for CurveSignal<C> {
    fn next_sample(&mut self) -> f64 {
        let value = self.curve.evaluate(self.position);
        self.position += self.step;
        value
    }

    fn process(&mut self, buffer: &mut [f64]) {
        // Offsets from the block start, not accumulated per sample
        self.curve.sample_into(self.position, self.step, buffer);
        self.position += self.step * buffer.len() as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubicSegment, CubicSegmentCurve};

    const EPSILON: f64 = 1e-12;

    fn ramp() -> CubicSegment {
        CubicSegment::new(0.0, 1.0, [0.0, 1.0, 0.0, 0.0])
    }

    #[test]
    fn test_creation() {
        let signal = CurveSignal::new(ramp(), 100.0);
        assert_eq!(signal.sample_rate(), 100.0);
        assert_eq!(signal.position(), 0.0);
    }

    #[test]
    fn test_next_sample_advances() {
        let mut signal = CurveSignal::new(ramp(), 10.0).with_start(0.5);
        assert!((signal.next_sample() - 0.5).abs() < EPSILON);
        assert!((signal.next_sample() - 0.6).abs() < EPSILON);
        assert!((signal.position() - 0.7).abs() < EPSILON);
    }

    #[test]
    fn test_process_matches_next_sample() {
        let mut curve = CubicSegmentCurve::from_points([(0.0, 0.0), (0.5, 1.0), (1.0, 0.25)]);
        curve.compile(true);

        let mut block = CurveSignal::new(curve.clone(), 64.0);
        let mut single = CurveSignal::new(curve, 64.0);
        let mut buffer = vec![0.0; 128];
        block.process(&mut buffer);

        for &sample in &buffer {
            assert!((sample - single.next_sample()).abs() < 1e-9);
        }
        assert!((block.position() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_seek() {
        let mut signal = CurveSignal::new(ramp(), 4.0);
        signal.seek(-1.0);
        assert_eq!(signal.next_sample(), -1.0);
        assert_eq!(signal.into_inner(), ramp());
    }
}
