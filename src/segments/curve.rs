//! A curve through a sequence of control points, built from cubic segments.

use crate::{CubicSegment, Curve, CurveError};

/// A control point the curve passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new control point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A piecewise-cubic curve through an ordered sequence of control points.
///
/// Points are appended with [`add_point`](Self::add_point) in non-decreasing
/// x order. That order is the caller's contract: it is never sorted or
/// corrected, and out-of-order input just produces whatever polynomials the
/// points imply. [`validate`](Self::validate) checks the contract explicitly.
///
/// [`compile`](Self::compile) turns the points into one
/// [`CubicSegment`] per consecutive pair, choosing each tangent from the
/// neighbouring points (see [`CubicSegment::from_smooth_window`]). Adding a
/// point afterwards discards the compiled segments; until the next compile the
/// curve evaluates flat at its first point's value (or `0.0` when empty).
/// A curve with a single point evaluates flat at that point.
///
/// Two points with the same x are allowed. The zero-width segment between them
/// is skipped by lookup, so the later point's value wins at that x, and the
/// segments either side use one-sided tangents there. Adding a point twice
/// ([`add_corner`](Self::add_corner)) therefore makes a corner.
///
/// The curve has no internal synchronisation. Share it across threads only
/// behind a lock that serialises `add_point`/`compile` against `evaluate`.
///
/// # Examples
///
/// ```
/// use cubic_segments::CubicSegmentCurve;
///
/// let mut curve = CubicSegmentCurve::new();
/// curve.add_point(0.0, 0.0);
/// curve.add_point(1.0, 2.0);
/// curve.add_point(3.0, 1.0);
/// curve.compile(false);
///
/// assert!((curve.evaluate(1.0) - 2.0).abs() < 1e-12);
/// assert!(curve.evaluate(2.0) > 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubicSegmentCurve {
    points: Vec<Point>,
    segments: Vec<CubicSegment>,
    compiled: bool,
}

impl CubicSegmentCurve {
    /// Creates an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an uncompiled curve from `(x, y)` pairs, without validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubic_segments::CubicSegmentCurve;
    ///
    /// let mut curve = CubicSegmentCurve::from_points([(0.0, 1.0), (1.0, 3.0)]);
    /// curve.compile(true);
    /// assert!((curve.evaluate(0.5) - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_points<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Self {
        let mut curve = Self::new();
        curve.extend(points);
        curve
    }

    /// Creates an uncompiled curve from `(x, y)` pairs, rejecting non-finite
    /// coordinates and decreasing x.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubic_segments::{CubicSegmentCurve, CurveError};
    ///
    /// let err = CubicSegmentCurve::try_from_points([(1.0, 0.0), (0.0, 0.0)]).unwrap_err();
    /// assert!(matches!(err, CurveError::OutOfOrder { index: 1, .. }));
    /// ```
    pub fn try_from_points<P: Into<Point>>(
        points: impl IntoIterator<Item = P>,
    ) -> Result<Self, CurveError> {
        let curve = Self::from_points(points);
        curve.validate()?;
        Ok(curve)
    }

    /// Appends a control point and discards any compiled segments.
    ///
    /// No ordering check is done here; x must not decrease.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
        self.invalidate();
    }

    /// Appends the same point twice, so the curve has a corner there.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubic_segments::CubicSegmentCurve;
    ///
    /// // All corners: straight lines between the points
    /// let mut curve = CubicSegmentCurve::new();
    /// curve.add_corner(0.0, 0.0);
    /// curve.add_corner(1.0, 1.0);
    /// curve.add_corner(2.0, 0.0);
    /// curve.compile(false);
    /// assert!((curve.evaluate(0.25) - 0.25).abs() < 1e-12);
    /// assert!((curve.evaluate(1.5) - 0.5).abs() < 1e-12);
    /// ```
    pub fn add_corner(&mut self, x: f64, y: f64) {
        self.add_point(x, y);
        self.add_point(x, y);
    }

    /// Removes all points and segments.
    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate();
    }

    /// Builds one segment per consecutive pair of points.
    ///
    /// Each segment takes its tangents from the points either side of its
    /// pair. At the ends of the sequence the missing neighbour is treated as
    /// a duplicate of the end point, so the first and last segments continue
    /// their own curvature outwards. `monotonic` is applied to every segment.
    pub fn compile(&mut self, monotonic: bool) {
        let count = self.points.len();
        self.segments.clear();
        self.segments.reserve(count.saturating_sub(1));

        let mut unordered = 0;
        for i in 0..count.saturating_sub(1) {
            let a = self.points[i.saturating_sub(1)];
            let b = self.points[i];
            let c = self.points[i + 1];
            let d = self.points[(i + 2).min(count - 1)];
            if c.x < b.x {
                unordered += 1;
            }
            self.segments.push(CubicSegment::from_smooth_window(
                [a.x, b.x, c.x, d.x],
                [a.y, b.y, c.y, d.y],
                monotonic,
            ));
        }
        self.compiled = true;

        if unordered > 0 {
            tracing::warn!(
                unordered,
                "control points are not in non-decreasing x order; curve shape is unspecified"
            );
        }
        tracing::debug!(
            points = count,
            segments = self.segments.len(),
            monotonic,
            "compiled cubic segment curve"
        );
    }

    /// Evaluates the curve at `x`.
    ///
    /// Uses the last segment starting at or before `x`. Before the first
    /// point the first segment is extrapolated; after the last point, the
    /// last segment.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.segment_at(x) {
            Some(segment) => segment.evaluate(x),
            None => self.points.first().map_or(0.0, |p| p.y),
        }
    }

    /// Evaluates the gradient `dy/dx` at `x`, using the same segment as
    /// [`evaluate`](Self::evaluate).
    pub fn derivative_at(&self, x: f64) -> f64 {
        self.segment_at(x).map_or(0.0, |s| s.gradient(x))
    }

    /// Checks every point is finite and x never decreases.
    pub fn validate(&self) -> Result<(), CurveError> {
        let mut previous: Option<f64> = None;
        for (index, p) in self.points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(CurveError::NonFinite {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
            if let Some(previous) = previous.filter(|&previous| p.x < previous) {
                return Err(CurveError::OutOfOrder {
                    index,
                    x: p.x,
                    previous,
                });
            }
            previous = Some(p.x);
        }
        Ok(())
    }

    /// The control points, in the order they were added.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The segments from the last compile, or empty if not compiled.
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no control points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if the segments reflect every added point.
    pub fn is_compiled(&self) -> bool {
        self.compiled
    }

    fn invalidate(&mut self) {
        self.segments.clear();
        self.compiled = false;
    }

    fn segment_at(&self, x: f64) -> Option<&CubicSegment> {
        let after = self.segments.partition_point(|s| s.start() <= x);
        self.segments.get(after.saturating_sub(1))
    }
}

impl Curve for CubicSegmentCurve {
    fn evaluate(&self, x: f64) -> f64 {
        CubicSegmentCurve::evaluate(self, x)
    }

    fn gradient(&self, x: f64) -> f64 {
        self.derivative_at(x)
    }
}

impl<P: Into<Point>> Extend<P> for CubicSegmentCurve {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.points.extend(iter.into_iter().map(Into::into));
        self.invalidate();
    }
}

impl<P: Into<Point>> FromIterator<P> for CubicSegmentCurve {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}
