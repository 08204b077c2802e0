//! Errors reported by the opt-in validation of control points.

use thiserror::Error;

/// A control point that breaks the curve's input contract.
///
/// Curves never return this from `add_point`, `compile` or `evaluate`; those
/// degrade gracefully. It is produced only by
/// [`CubicSegmentCurve::validate`](crate::CubicSegmentCurve::validate) and
/// [`CubicSegmentCurve::try_from_points`](crate::CubicSegmentCurve::try_from_points).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// A coordinate is NaN or infinite.
    #[error("control point {index} is not finite: ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    /// x decreased relative to the previous control point.
    #[error("control point {index} is out of order: x = {x} follows x = {previous}")]
    OutOfOrder { index: usize, x: f64, previous: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_non_finite() {
        let err = CurveError::NonFinite {
            index: 2,
            x: f64::NAN,
            y: 1.0,
        };
        assert_eq!(err.to_string(), "control point 2 is not finite: (NaN, 1)");
    }

    #[test]
    fn test_display_out_of_order() {
        let err = CurveError::OutOfOrder {
            index: 3,
            x: 0.5,
            previous: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "control point 3 is out of order: x = 0.5 follows x = 1.5"
        );
    }
}
