//! Randomized cubic control points between two endpoints.
//!
//! The interior control points are displaced from the start and the end point
//! respectively by up to `deviation * |fin - init|` along each axis, every
//! offset drawn independently and uniformly from `[-1, 1]`. The random source
//! is passed in, or confined to the calling thread for the convenience entry points.
use log::trace;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bezier::{Bezier, CubicBezier};
use crate::point::Point;
use crate::point2::Point2;

/// Synthesizes `[init, P1, P2, fin]` drawing from the calling thread's generator.
///
/// A `deviation` of 0, or coinciding endpoints, collapse `P1` onto `init` and `P2` onto `fin`.
/// Inputs are not validated: a NaN or infinite argument shows up as NaN in the interior points.
pub fn synthesize_control_points<F>(init: Point2<F>, fin: Point2<F>, deviation: F) -> CubicBezier<Point2<F>>
where
    F: Float + Default + SampleUniform,
{
    synthesize_control_points_with(&mut rand::thread_rng(), init, fin, deviation)
}

/// Like `synthesize_control_points` with an explicit random source, e.g. a seeded one for reproducible output.
pub fn synthesize_control_points_with<F, R>(
    rng: &mut R,
    init: Point2<F>,
    fin: Point2<F>,
    deviation: F,
) -> CubicBezier<Point2<F>>
where
    F: Float + Default + SampleUniform,
    R: Rng + ?Sized,
{
    let distance = init.distance(fin);
    let max_deviation = deviation * distance;
    trace!(
        "synthesizing control points, distance {:?}, max deviation {:?}",
        distance.to_f64(),
        max_deviation.to_f64()
    );

    let unit: Uniform<F> = Uniform::new_inclusive(-F::one(), F::one());
    let mut offset = || rng.sample(&unit) * max_deviation;

    // one independent draw per coordinate, in the order P1.x, P1.y, P2.x, P2.y
    let ctrl1 = Point2::new(init.x + offset(), init.y + offset());
    let ctrl2 = Point2::new(fin.x + offset(), fin.y + offset());

    Bezier::new([init, ctrl1, ctrl2, fin])
}

/// Owns a random source for repeated synthesis, one instance per thread or task.
#[derive(Debug, Clone)]
pub struct Synthesizer<R> {
    rng: R,
}

impl Synthesizer<StdRng> {
    /// Reproducible synthesizer, the same seed yields the same sequence of control points.
    pub fn seeded(seed: u64) -> Self {
        Synthesizer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Synthesizer<R> {
    pub fn from_rng(rng: R) -> Self {
        Synthesizer { rng }
    }

    pub fn synthesize<F>(&mut self, init: Point2<F>, fin: Point2<F>, deviation: F) -> CubicBezier<Point2<F>>
    where
        F: Float + Default + SampleUniform,
    {
        synthesize_control_points_with(&mut self.rng, init, fin, deviation)
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}
