//! Prints smooth, monotonic and linear curves through the same control points
//! as CSV, ready for plotting.
//!
//! Run with: cargo run --example curve_table > curves.csv

use std::io::Write;

use anyhow::{Context, Result};
use cubic_segments::CubicSegmentCurve;

const POINTS: [(f64, f64); 11] = [
    (0.0, 0.5),
    (1.0, 1.0),
    (1.5, 3.0),
    (2.5, 1.5),
    (2.5, 1.5),
    (3.5, 1.8),
    (4.0, 3.0),
    (4.0, 0.25),
    (5.0, 2.0),
    (6.0, 2.25),
    (6.5, 1.5),
];

fn main() -> Result<()> {
    let parsed = CubicSegmentCurve::try_from_points(POINTS);
    let mut smooth = parsed.context("invalid control points")?;
    let mut monotonic = smooth.clone();
    let mut linear = CubicSegmentCurve::new();
    for (x, y) in POINTS {
        linear.add_corner(x, y);
    }

    smooth.compile(false);
    monotonic.compile(true);
    linear.compile(false);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "x,smooth,monotonic,linear")?;
    for i in 0..=850 {
        let x = -1.0 + i as f64 * 0.01;
        writeln!(
            out,
            "{:.2},{:.6},{:.6},{:.6}",
            x,
            smooth.evaluate(x),
            monotonic.evaluate(x),
            linear.evaluate(x)
        )?;
    }

    Ok(())
}
