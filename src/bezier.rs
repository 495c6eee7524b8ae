use core::slice;

use num_traits::One;

use crate::config::SampleConfig;
use crate::error::BezierError;
use crate::evaluate::evaluate_bezier_with;
use crate::point::Point;
use crate::polyline::CurvePolyline;

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by an array of 'control_points'. The degree is defined as degree = control_points.len() - 1.
/// Single points on the curve can be evaluated with an interpolation parameter 't' in interval [0,1] using eval(),
/// the whole curve is sampled with sample() / sample_with().
/// Generic parameters:
/// P: Generic points 'P' as defined by the Point trait
/// const generic parameters:
/// N: Number of control points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier<P, const N: usize>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: [P; N],
}

/// A linear Bezier curve, the straight segment between two points.
pub type LineSegment<P> = Bezier<P, 2>;

/// The cubic curve: start point, two successive control points and end point.
pub type CubicBezier<P> = Bezier<P, 4>;

impl<P: Point, const N: usize> IntoIterator for Bezier<P, { N }> {
    type Item = P;
    type IntoIter = core::array::IntoIter<Self::Item, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterator::into_iter(self.control_points)
    }
}

impl<'a, P: Point, const N: usize> IntoIterator for &'a Bezier<P, { N }> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.control_points.iter()
    }
}

impl<P: Point, const N: usize> TryFrom<&[P]> for Bezier<P, { N }> {
    type Error = BezierError;

    fn try_from(points: &[P]) -> Result<Self, Self::Error> {
        let control_points = <[P; N]>::try_from(points).map_err(|_| BezierError::ShapeMismatch {
            expected: N,
            found: points.len(),
        })?;
        Ok(Bezier { control_points })
    }
}

impl<P, const N: usize> Bezier<P, { N }>
where
    P: Point,
{
    /// Create a new Bezier curve from its `control_points`. The degree is defined as degree = control_points.len() - 1.
    pub fn new(control_points: [P; N]) -> Bezier<P, { N }> {
        Bezier { control_points }
    }

    pub fn control_points(&self) -> [P; N] {
        self.control_points
    }

    pub fn as_slice(&self) -> &[P] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        N.saturating_sub(1)
    }

    pub fn start(&self) -> Option<P> {
        self.control_points.first().copied()
    }

    pub fn end(&self) -> Option<P> {
        self.control_points.last().copied()
    }

    /// Evaluate a point on the curve at point 't' which should be in the interval [0,1]
    /// This is implemented using De Casteljau's algorithm (over a temporary array with const generic sizing)
    pub fn eval(&self, t: P::Scalar) -> P {
        // start with a copy of the original control points array and succesively use it for evaluation
        let mut p: [P; N] = self.control_points;
        // loop up to degree = control_points.len() -1
        for i in 1..p.len() {
            for j in 0..p.len() - i {
                p[j] = p[j] * (P::Scalar::one() - t) + p[j + 1] * t;
            }
        }
        p[0]
    }

    /// Samples the curve at the default 101 evenly spaced parameter values using its Bernstein form.
    pub fn sample(&self) -> Result<CurvePolyline<P>, BezierError> {
        self.sample_with(&SampleConfig::default())
    }

    pub fn sample_with(&self, config: &SampleConfig) -> Result<CurvePolyline<P>, BezierError> {
        evaluate_bezier_with(&self.control_points, config)
    }
}
