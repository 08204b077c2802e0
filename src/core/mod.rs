//! Core traits shared by segments, curves and samplers.
//!
//! This module provides:
//! - `Curve` trait for anything that maps x to y and can report its gradient
//! - `Signal` trait for sample-by-sample generators

mod curve;
mod signal;

pub use curve::Curve;
pub use signal::Signal;
