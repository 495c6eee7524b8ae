//! Sampling of Bézier curves from a small set of control points.
//!
//! - `pascal_row()` computes one row of Pascal's triangle, the binomial weights of the Bernstein basis
//! - `evaluate_bezier()` samples a curve of any degree >= 1 into a polyline of 101 points
//! - `synthesize_control_points()` builds a randomized cubic between two endpoints
//!
//! ```rust
//! use bezier_sample::{evaluate_bezier, synthesize_control_points, Point2};
//!
//! let controls = synthesize_control_points(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), 0.25);
//! let curve = evaluate_bezier(controls.as_slice()).unwrap();
//! assert_eq!(curve.len(), 101);
//! ```
//!
//! Curve code is generic over the `Point` trait, so other point types can be sampled by
//! implementing it. Randomness is always drawn from an injected generator or the calling
//! thread's own one.

pub mod bezier;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod flat;
pub mod pascal;
pub mod point;
pub mod point2;
pub mod polyline;
pub mod synthesize;

pub use bezier::{Bezier, CubicBezier, LineSegment};
pub use config::{SampleConfig, DEFAULT_SAMPLES};
pub use error::BezierError;
pub use evaluate::{evaluate_bezier, evaluate_bezier_with, Evaluator};
pub use flat::{evaluate_bezier_flat, points_from_flat, points_to_flat, synthesize_control_points_flat};
pub use pascal::{pascal_row, pascal_row_checked, CoefficientCache, CoefficientRow, MAX_DEGREE};
pub use point::Point;
pub use point2::Point2;
pub use polyline::CurvePolyline;
pub use synthesize::{synthesize_control_points, synthesize_control_points_with, Synthesizer};

/// Absolute tolerance when comparing sampled points against expected coordinates
pub const EPSILON: f64 = 1e-9;
