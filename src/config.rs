use num_traits::{Float, NumCast};

use crate::error::BezierError;

/// Number of samples of a curve evaluation, `t = 0, 0.01, ..., 1.00`.
pub const DEFAULT_SAMPLES: usize = 101;

/// Resolution of a curve evaluation. The parameter range `[0, 1]` is divided into
/// `samples - 1` equal steps and both endpoints are always sampled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    samples: usize,
}

impl SampleConfig {
    /// Requires at least 2 samples so that `t = 0` and `t = 1` are both present.
    pub fn with_samples(samples: usize) -> Result<Self, BezierError> {
        if samples < 2 {
            return Err(BezierError::InvalidResolution { samples });
        }
        Ok(SampleConfig { samples })
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of equal parameter steps between consecutive samples.
    pub fn segments(&self) -> usize {
        self.samples - 1
    }

    /// Parameter value of sample `index`. The last sample is exactly 1.
    pub fn parameter<F: Float>(&self, index: usize) -> F {
        // both conversions are lossless for any realistic sample count
        let i = <F as NumCast>::from(index).unwrap_or_else(F::nan);
        let n = <F as NumCast>::from(self.segments()).unwrap_or_else(F::nan);
        i / n
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            samples: DEFAULT_SAMPLES,
        }
    }
}
