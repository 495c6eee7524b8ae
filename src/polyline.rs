use core::ops::Index;
use core::slice;

use num_traits::Zero;

use crate::point::Point;

/// Points sampled along a curve at evenly spaced parameter values, in parameter order.
/// Immutable once produced by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePolyline<P> {
    points: Vec<P>,
}

impl<P: Point> CurvePolyline<P> {
    pub(crate) fn from_samples(points: Vec<P>) -> Self {
        CurvePolyline { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.points.iter()
    }

    /// Sample at `t = 0`
    pub fn first(&self) -> Option<P> {
        self.points.first().copied()
    }

    /// Sample at `t = 1`
    pub fn last(&self) -> Option<P> {
        self.points.last().copied()
    }

    /// Length of the polyline, i.e. the arc length of the curve flattened into straight segments.
    /// At the default resolution the error is already in the decimal places for typical curves.
    pub fn length(&self) -> P::Scalar {
        self.points
            .windows(2)
            .fold(P::Scalar::zero(), |len, pair| len + pair[0].distance(pair[1]))
    }

    /// Interleaved coordinates `[x0, y0, x1, y1, ...]`
    pub fn to_flat(&self) -> Vec<P::Scalar> {
        let mut flat = Vec::with_capacity(self.points.len() * 2);
        for p in &self.points {
            flat.push(p.x());
            flat.push(p.y());
        }
        flat
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

impl<P> Index<usize> for CurvePolyline<P> {
    type Output = P;

    fn index(&self, index: usize) -> &P {
        &self.points[index]
    }
}

impl<P> IntoIterator for CurvePolyline<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a CurvePolyline<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point2, EPSILON};

    #[test]
    fn length_sums_segments() {
        let line = CurvePolyline::from_samples(vec![
            Point2::new(0f64, 0f64),
            Point2::new(3f64, 4f64),
            Point2::new(3f64, 10f64),
        ]);
        assert!((line.length() - 11.0).abs() < EPSILON);
        assert_eq!(line.first(), Some(Point2::new(0.0, 0.0)));
        assert_eq!(line.last(), Some(Point2::new(3.0, 10.0)));
    }

    #[test]
    fn flat_layout_is_interleaved() {
        let line = CurvePolyline::from_samples(vec![Point2::new(1f64, 2f64), Point2::new(3f64, 4f64)]);
        assert_eq!(line.to_flat(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(line[1], Point2::new(3.0, 4.0));
        let xs: Vec<f64> = line.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
    }
}
