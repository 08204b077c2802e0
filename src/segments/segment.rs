//! A single cubic polynomial and the ways of building one.

use crate::Curve;

/// One cubic polynomial, valid over `[x0, x1]`.
///
/// The coefficients are stored in terms of `t = x - x0`:
///
/// `y = a0 + a1·t + a2·t² + a3·t³`
///
/// Segments are immutable. They are built from raw coefficients
/// ([`new`](Self::new)), from endpoint values and gradients
/// ([`from_hermite`](Self::from_hermite)), or from a four-point window with
/// automatically chosen tangents ([`from_smooth_window`](Self::from_smooth_window)).
///
/// Evaluation is not clamped to the interval: outside `[x0, x1]` the same
/// polynomial is extrapolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    x0: f64,
    x1: f64,
    coefficients: [f64; 4],
}

impl CubicSegment {
    /// Creates a segment from raw polynomial coefficients.
    ///
    /// # Arguments
    ///
    /// * `x0` - Start of the interval, and the origin of the polynomial
    /// * `x1` - End of the interval
    /// * `coefficients` - `[a0, a1, a2, a3]` in terms of `x - x0`
    ///
    /// # Examples
    ///
    /// ```
    /// use cubic_segments::CubicSegment;
    ///
    /// // y = 1 + (x - 2)²
    /// let s = CubicSegment::new(2.0, 4.0, [1.0, 0.0, 1.0, 0.0]);
    /// assert_eq!(s.evaluate(3.0), 2.0);
    /// ```
    pub fn new(x0: f64, x1: f64, coefficients: [f64; 4]) -> Self {
        Self {
            x0,
            x1,
            coefficients,
        }
    }

    /// Creates a segment that is `y` everywhere.
    pub fn constant(x0: f64, x1: f64, y: f64) -> Self {
        Self::new(x0, x1, [y, 0.0, 0.0, 0.0])
    }

    /// Builds the unique cubic through `(x0, y0)` and `(x1, y1)` with
    /// gradient `g0` at `x0` and `g1` at `x1`.
    ///
    /// A zero-width interval (`x0 == x1`) has no room for a cubic and gives a
    /// constant segment at `y1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubic_segments::CubicSegment;
    ///
    /// let s = CubicSegment::from_hermite(0.0, 2.0, 1.0, 3.0, 0.0, 0.0);
    /// assert!((s.evaluate(0.0) - 1.0).abs() < 1e-12);
    /// assert!((s.evaluate(2.0) - 3.0).abs() < 1e-12);
    /// assert!(s.derivative().evaluate(2.0).abs() < 1e-12);
    /// ```
    pub fn from_hermite(x0: f64, x1: f64, y0: f64, y1: f64, g0: f64, g1: f64) -> Self {
        let width = x1 - x0;
        if width == 0.0 {
            return Self::constant(x0, x1, y1);
        }
        let secant = (y1 - y0) / width;
        let a2 = (3.0 * secant - 2.0 * g0 - g1) / width;
        let a3 = (g0 + g1 - 2.0 * secant) / (width * width);
        Self::new(x0, x1, [y0, g0, a2, a3])
    }

    /// Builds the segment over `[x1, x2]` from a four-point window
    /// `xs = [x0, x1, x2, x3]`, `ys = [y0, y1, y2, y3]`.
    ///
    /// The tangent at each inner point is the secant between its two
    /// neighbours, `(y2 - y0) / (x2 - x0)` at `x1` and `(y3 - y1) / (x3 - x1)`
    /// at `x2`. Two adjacent windows therefore agree on the tangent at their
    /// shared point, and consecutive segments join with a continuous gradient.
    ///
    /// When an outer point duplicates its inner neighbour (`x0 == x1` or
    /// `x2 == x3`) it carries no slope. That tangent instead continues the
    /// segment's own curvature (`2·secant - other tangent`), or is zero when
    /// the duplicate is a vertical jump against the secant's direction (the
    /// point is a local extremum). With duplicates on both sides the segment
    /// is a straight line.
    ///
    /// With `monotonic` set, each tangent is zero where the secants either
    /// side of its point change sign, and is otherwise limited to three times
    /// the smaller of those secants. The segment then never leaves
    /// `[min(y1, y2), max(y1, y2)]`.
    ///
    /// A zero-width window (`x1 == x2`) gives a constant segment at `y2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubic_segments::CubicSegment;
    ///
    /// // Colinear points give a straight line
    /// let s = CubicSegment::from_smooth_window([0.0, 1.0, 2.0, 3.0], [0.0, 1.0, 2.0, 3.0], false);
    /// assert!((s.evaluate(1.5) - 1.5).abs() < 1e-12);
    ///
    /// // A peak at x1 is flattened when monotonic
    /// let s = CubicSegment::from_smooth_window([0.0, 1.0, 2.0, 3.0], [-1.0, 1.0, 0.0, 2.0], true);
    /// assert!(s.derivative().evaluate(1.0).abs() < 1e-12);
    /// ```
    pub fn from_smooth_window(xs: [f64; 4], ys: [f64; 4], monotonic: bool) -> Self {
        let [x0, x1, x2, x3] = xs;
        let [y0, y1, y2, y3] = ys;
        if x1 == x2 {
            return Self::constant(x1, x2, y2);
        }
        let secant = (y2 - y1) / (x2 - x1);

        // `None` means the tangent continues from the other side
        let left = if x0 == x1 {
            duplicate_tangent(y1 - y0, secant)
        } else {
            Some(knot_tangent((x0, y0), (x1, y1), (x2, y2), monotonic))
        };
        let right = if x2 == x3 {
            duplicate_tangent(y3 - y2, secant)
        } else {
            Some(knot_tangent((x1, y1), (x2, y2), (x3, y3), monotonic))
        };

        let (g1, g2) = match (left, right) {
            (Some(g1), Some(g2)) => (g1, g2),
            (Some(g1), None) => (g1, continue_tangent(secant, g1, monotonic)),
            (None, Some(g2)) => (continue_tangent(secant, g2, monotonic), g2),
            (None, None) => (secant, secant),
        };
        Self::from_hermite(x1, x2, y1, y2, g1, g2)
    }

    /// Evaluates the polynomial at `x`, extrapolating outside the interval.
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.x0;
        let [a0, a1, a2, a3] = self.coefficients;
        a0 + t * (a1 + t * (a2 + t * a3))
    }

    /// Returns the segment `dy/dx` over the same interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubic_segments::CubicSegment;
    ///
    /// // y = t³  →  dy/dx = 3t²
    /// let s = CubicSegment::new(0.0, 1.0, [0.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(s.derivative().coefficients(), [0.0, 0.0, 3.0, 0.0]);
    /// ```
    pub fn derivative(&self) -> Self {
        let [_, a1, a2, a3] = self.coefficients;
        Self::new(self.x0, self.x1, [a1, 2.0 * a2, 3.0 * a3, 0.0])
    }

    /// Start of the interval.
    pub fn start(&self) -> f64 {
        self.x0
    }

    /// End of the interval.
    pub fn end(&self) -> f64 {
        self.x1
    }

    /// Polynomial coefficients `[a0, a1, a2, a3]` in terms of `x - start()`.
    pub fn coefficients(&self) -> [f64; 4] {
        self.coefficients
    }

    /// True if the interval has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.x0 == self.x1
    }
}

impl Curve for CubicSegment {
    fn evaluate(&self, x: f64) -> f64 {
        CubicSegment::evaluate(self, x)
    }

    fn gradient(&self, x: f64) -> f64 {
        let t = x - self.x0;
        let [_, a1, a2, a3] = self.coefficients;
        a1 + t * (2.0 * a2 + t * 3.0 * a3)
    }
}

/// Tangent at `knot` from its two neighbours, which must have distinct x.
///
/// Only depends on the three points, so both segments meeting at `knot`
/// compute the same value.
fn knot_tangent(before: (f64, f64), knot: (f64, f64), after: (f64, f64), monotonic: bool) -> f64 {
    let tangent = (after.1 - before.1) / (after.0 - before.0);
    if !monotonic {
        return tangent;
    }
    let secant_before = (knot.1 - before.1) / (knot.0 - before.0);
    let secant_after = (after.1 - knot.1) / (after.0 - knot.0);
    if secant_before * secant_after <= 0.0 {
        return 0.0;
    }
    let limit = 3.0 * secant_before.abs().min(secant_after.abs());
    tangent.clamp(-limit, limit)
}

/// Tangent at a point whose outer neighbour shares its x.
///
/// `jump` is the vertical step across the duplicate, in the direction of
/// travel. Returns `None` when the tangent should continue the segment.
fn duplicate_tangent(jump: f64, secant: f64) -> Option<f64> {
    if jump != 0.0 && jump * secant <= 0.0 {
        Some(0.0)
    } else {
        None
    }
}

/// Tangent that keeps the segment's curvature constant given the tangent
/// at its other end.
///
/// In monotonic mode `other` is already within `[0, 3 * secant]`, so the
/// result is at most `2 * secant` once a wrong sign is zeroed.
fn continue_tangent(secant: f64, other: f64, monotonic: bool) -> f64 {
    let tangent = 2.0 * secant - other;
    if monotonic && tangent * secant < 0.0 {
        0.0
    } else {
        tangent
    }
}
