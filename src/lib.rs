//! Cubic Segments - piecewise-cubic curves through control points
//!
//! This library turns a sparse, irregularly spaced sequence of `(x, y)`
//! control points into a continuous function `y = f(x)`. Each interval
//! between points is a cubic Hermite segment whose tangents are chosen from
//! the neighbouring points, optionally limited so the curve never overshoots
//! between points.
//!
//! # Examples
//!
//! ```
//! use cubic_segments::CubicSegmentCurve;
//!
//! let mut curve = CubicSegmentCurve::new();
//! curve.add_point(0.0, 0.5);
//! curve.add_point(1.0, 1.0);
//! curve.add_point(1.5, 3.0);
//! curve.add_point(2.5, 1.5);
//! curve.compile(true);
//!
//! // Monotonic curves stay between their neighbouring points
//! let y = curve.evaluate(0.5);
//! assert!(y >= 0.5 && y <= 1.0);
//! ```

pub mod core;
pub mod error;
#[cfg(feature = "signal")]
pub mod sampler;
pub mod segments;

// Re-export commonly used types at the crate root
pub use self::core::{Curve, Signal};
pub use error::CurveError;
#[cfg(feature = "signal")]
pub use sampler::CurveSignal;
pub use segments::{CubicSegment, CubicSegmentCurve, Point};

#[cfg(feature = "macros")]
pub use cubic_segments_macros::curve;
