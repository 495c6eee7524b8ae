//! Sampling of Bézier curves of any degree in Bernstein form.
//!
//! A curve of degree `n` with control points `p[0..=n]` is
//! ```text
//! B(t) = SUM j=0..n ( C(n,j) * t^j * (1-t)^(n-j) * p[j] ),  t in [0, 1]
//! ```
//! and is sampled at evenly spaced parameter values, 101 by default.
use log::debug;
use num_traits::{NumCast, One};

use crate::config::SampleConfig;
use crate::error::BezierError;
use crate::pascal::{pascal_row, CoefficientCache, CoefficientRow};
use crate::point::Point;
use crate::polyline::CurvePolyline;

/// Samples the curve defined by `control_points` at 101 evenly spaced parameter values.
///
/// The degree is `control_points.len() - 1` and must be at least 1: a single control point
/// does not define a curve and is rejected with `InvalidDegree`, as is an empty buffer.
/// Non-finite coordinates are not rejected, they propagate into the samples as NaN.
pub fn evaluate_bezier<P: Point>(control_points: &[P]) -> Result<CurvePolyline<P>, BezierError> {
    evaluate_bezier_with(control_points, &SampleConfig::default())
}

/// Like `evaluate_bezier` with a custom resolution.
pub fn evaluate_bezier_with<P: Point>(
    control_points: &[P],
    config: &SampleConfig,
) -> Result<CurvePolyline<P>, BezierError> {
    let degree = curve_degree(control_points)?;
    let row = pascal_row(degree)?;
    sample_bernstein(control_points, &row, config)
}

/// Reusable evaluator that keeps the coefficient rows of the degrees it has seen.
/// Worth it when many curves of the same degree are sampled, e.g. one cubic per animation segment.
/// An evaluator is meant to be owned by a single thread.
#[derive(Debug, Default, Clone)]
pub struct Evaluator {
    config: SampleConfig,
    cache: CoefficientCache,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SampleConfig) -> Self {
        debug!("evaluator sampling {} points per curve", config.samples());
        Evaluator {
            config,
            cache: CoefficientCache::new(),
        }
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Number of degrees whose coefficient rows are currently cached
    pub fn cached_degrees(&self) -> usize {
        self.cache.len()
    }

    pub fn evaluate<P: Point>(&mut self, control_points: &[P]) -> Result<CurvePolyline<P>, BezierError> {
        let degree = curve_degree(control_points)?;
        let row = self.cache.row(degree)?;
        sample_bernstein(control_points, row, &self.config)
    }
}

/// Degree of the curve defined by `control_points`, at least 1.
pub(crate) fn curve_degree<P>(control_points: &[P]) -> Result<usize, BezierError> {
    match control_points.len() {
        0 => Err(BezierError::InvalidDegree { degree: -1, min: 1 }),
        1 => Err(BezierError::InvalidDegree { degree: 0, min: 1 }),
        len => Ok(len - 1),
    }
}

fn sample_bernstein<P: Point>(
    control_points: &[P],
    row: &CoefficientRow,
    config: &SampleConfig,
) -> Result<CurvePolyline<P>, BezierError> {
    if row.len() != control_points.len() {
        return Err(BezierError::ShapeMismatch {
            expected: row.len(),
            found: control_points.len(),
        });
    }
    let degree = row.degree();

    let coefficients = row
        .iter()
        .map(|&c| <P::Scalar as NumCast>::from(c).ok_or(BezierError::ScalarConversion { coefficient: c }))
        .collect::<Result<Vec<P::Scalar>, BezierError>>()?;

    // powers t^j and (1-t)^j, built by repeated multiplication so that x^0 is exactly 1 for x = 0
    let mut t_pow = vec![P::Scalar::one(); degree + 1];
    let mut s_pow = vec![P::Scalar::one(); degree + 1];

    let mut samples = Vec::with_capacity(config.samples());
    for i in 0..config.samples() {
        let t: P::Scalar = config.parameter(i);
        let s = P::Scalar::one() - t;
        for j in 1..=degree {
            t_pow[j] = t_pow[j - 1] * t;
            s_pow[j] = s_pow[j - 1] * s;
        }

        let mut point = control_points[0] * (coefficients[0] * s_pow[degree]);
        for j in 1..=degree {
            let weight = coefficients[j] * t_pow[j] * s_pow[degree - j];
            point = point + control_points[j] * weight;
        }
        samples.push(point);
    }

    Ok(CurvePolyline::from_samples(samples))
}
