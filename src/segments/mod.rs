//! Cubic segments and the curves built from them.
//!
//! This module provides:
//! - `CubicSegment`: one cubic polynomial over an interval
//! - `CubicSegmentCurve`: a curve through control points, compiled into segments
//! - `Point`: a control point

mod curve;
mod segment;

pub use curve::{CubicSegmentCurve, Point};
pub use segment::CubicSegment;
