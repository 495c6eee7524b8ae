use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait defined over generic 2D points which themselves are generic over a float Scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for sampling curves, so that implementing it requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point: Copy + PartialEq + Default
where
    Self: Add<Self, Output = Self>
        + Sub<Self, Output = Self>
        + Mul<<Self as Point>::Scalar, Output = Self>,
{
    type Scalar: Float;

    fn x(&self) -> Self::Scalar;

    fn y(&self) -> Self::Scalar;

    /// Returns the euclidean distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        (dx * dx + dy * dy).sqrt()
    }
}
