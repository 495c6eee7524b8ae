//! Interleaved coordinate buffers `[x0, y0, x1, y1, ...]`, the layout of `(n, 2)`
//! double arrays handed over by array libraries and foreign callers.
use num_traits::Float;

use crate::error::BezierError;
use crate::evaluate::evaluate_bezier;
use crate::point2::Point2;
use crate::synthesize::synthesize_control_points;

/// Splits an interleaved buffer into points. An odd length is a shape mismatch whose
/// `expected` length is the buffer without its trailing unpaired coordinate.
pub fn points_from_flat<F: Copy>(flat: &[F]) -> Result<Vec<Point2<F>>, BezierError> {
    if flat.len() % 2 != 0 {
        return Err(BezierError::ShapeMismatch {
            expected: flat.len() - 1,
            found: flat.len(),
        });
    }
    Ok(flat.chunks_exact(2).map(|xy| Point2::new(xy[0], xy[1])).collect())
}

pub fn points_to_flat<F: Copy>(points: &[Point2<F>]) -> Vec<F> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Samples the curve whose control points are given interleaved and returns the
/// 101 samples interleaved as well, 202 values in total.
pub fn evaluate_bezier_flat<F>(control_points: &[F]) -> Result<Vec<F>, BezierError>
where
    F: Float + Default,
{
    let points = points_from_flat(control_points)?;
    Ok(evaluate_bezier(&points)?.to_flat())
}

/// Synthesizes cubic control points from `(x, y)` endpoints and returns them as the
/// 8 interleaved coordinates of `[init, P1, P2, fin]`.
pub fn synthesize_control_points_flat(init: [f64; 2], fin: [f64; 2], deviation: f64) -> [f64; 8] {
    let curve = synthesize_control_points(init.into(), fin.into(), deviation);
    let mut flat = [0.0; 8];
    for (i, p) in curve.into_iter().enumerate() {
        flat[2 * i] = p.x;
        flat[2 * i + 1] = p.y;
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn odd_buffers_are_rejected() {
        assert_eq!(
            points_from_flat(&[1.0, 2.0, 3.0]),
            Err(BezierError::ShapeMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            evaluate_bezier_flat(&[0.0f64, 0.0, 10.0]),
            Err(BezierError::ShapeMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            points_from_flat(&[1.0f64]),
            Err(BezierError::ShapeMismatch { expected: 0, found: 1 })
        );
    }

    #[test]
    fn points_round_trip_through_flat_layout() {
        let flat = [0.0f64, 1.0, 2.0, 3.0, 4.0, 5.0];
        let points = points_from_flat(&flat).unwrap();
        assert_eq!(points, vec![Point2::new(0.0, 1.0), Point2::new(2.0, 3.0), Point2::new(4.0, 5.0)]);
        assert_eq!(points_to_flat(&points), flat.to_vec());
    }

    #[test]
    fn flat_straight_line() {
        let samples = evaluate_bezier_flat(&[0.0f64, 0.0, 10.0, 0.0]).unwrap();
        assert_eq!(samples.len(), 202);
        for i in 0..=100 {
            assert!((samples[2 * i] - 10.0 * (i as f64 / 100.0)).abs() < EPSILON);
            assert_eq!(samples[2 * i + 1], 0.0);
        }
    }

    #[test]
    fn single_point_buffer_is_rejected() {
        assert!(evaluate_bezier_flat(&[1.0f64, 1.0]).is_err());
        assert!(evaluate_bezier_flat::<f64>(&[]).is_err());
    }

    #[test]
    fn flat_synthesis_layout() {
        assert_eq!(
            synthesize_control_points_flat([0.0, 0.0], [10.0, 0.0], 0.0),
            [0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 10.0, 0.0]
        );
        let flat = synthesize_control_points_flat([1.0, 2.0], [3.0, 4.0], 0.5);
        assert_eq!(&flat[..2], &[1.0, 2.0]);
        assert_eq!(&flat[6..], &[3.0, 4.0]);
    }
}
