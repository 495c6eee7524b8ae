//! Error type shared by the coefficient generator, the evaluator and the
//! flat buffer helpers.
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BezierError {
    /// A degree outside the domain of the requested operation:
    /// negative for coefficient rows, below 1 for curve evaluation.
    InvalidDegree { degree: i64, min: i64 },
    /// A buffer whose length does not match the shape implied by its use.
    ShapeMismatch { expected: usize, found: usize },
    /// The binomial recurrence would overflow `u64` for this degree.
    CoefficientOverflow { degree: usize },
    /// Fewer than two samples were requested, so both endpoints cannot be represented.
    InvalidResolution { samples: usize },
    /// A binomial coefficient could not be represented in the point's scalar type.
    ScalarConversion { coefficient: u64 },
}

impl fmt::Display for BezierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BezierError::InvalidDegree { degree, min } => {
                write!(f, "invalid degree {}, expected at least {}", degree, min)
            }
            BezierError::ShapeMismatch { expected, found } => {
                write!(f, "buffer has length {}, expected {}", found, expected)
            }
            BezierError::CoefficientOverflow { degree } => {
                write!(f, "binomial coefficients of degree {} overflow u64", degree)
            }
            BezierError::InvalidResolution { samples } => {
                write!(f, "{} samples requested, at least 2 are required", samples)
            }
            BezierError::ScalarConversion { coefficient } => {
                write!(f, "coefficient {} is not representable as a scalar", coefficient)
            }
        }
    }
}

impl std::error::Error for BezierError {}
