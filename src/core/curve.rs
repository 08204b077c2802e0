//! The function-of-x interface implemented by segments and whole curves.

/// Common interface for anything that can be evaluated as `y = f(x)`.
///
/// Both a single [`CubicSegment`](crate::CubicSegment) and a compiled
/// [`CubicSegmentCurve`](crate::CubicSegmentCurve) implement this trait, so
/// consumers (such as [`CurveSignal`](crate::CurveSignal)) can be written once
/// for either.
///
/// # Examples
///
/// ```
/// use cubic_segments::{CubicSegment, Curve};
///
/// let line = CubicSegment::from_hermite(0.0, 1.0, 0.0, 1.0, 1.0, 1.0);
/// assert!((line.evaluate(0.25) - 0.25).abs() < 1e-12);
/// assert!((line.gradient(0.25) - 1.0).abs() < 1e-12);
/// ```
pub trait Curve {
    /// Evaluates the curve at `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Evaluates the first derivative `dy/dx` at `x`.
    fn gradient(&self, x: f64) -> f64;

    /// Fills `buffer` with values sampled at `start`, `start + step`, ...
    ///
    /// Default implementation calls `evaluate()` for each element.
    ///
    /// # Arguments
    ///
    /// * `start` - x of the first sample
    /// * `step` - Distance in x between consecutive samples
    /// * `buffer` - Mutable slice to fill with samples
    fn sample_into(&self, start: f64, step: f64, buffer: &mut [f64]) {
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample = self.evaluate(start + step * i as f64);
        }
    }
}
