use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;

/// Plain 2D point, the coordinate type exchanged at the crate boundary.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T: Copy> Point2<T> {
    /// Returns the point as an `(x, y)` tuple, the layout plotting libraries expect
    pub fn to_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    // The multiplication is done by multiplying T * T => T
    // for each coordinate, the scalar being the right hand side.
    T: Mul<T, Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default,
{
    type Scalar = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypothenuse 5
    #[test]
    fn distance_pythagorean() {
        let a = Point2::new(0f64, 0f64);
        let b = Point2::new(3f64, 4f64);
        assert!((a.distance(b) - 5.0).abs() < EPSILON);
        assert!((b.distance(a) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Point2::new(1.5f64, -2.0);
        let b = Point2::new(0.5f64, 4.0);
        assert_eq!(a + b, Point2::new(2.0, 2.0));
        assert_eq!(a - b, Point2::new(1.0, -6.0));
        assert_eq!(a * 2.0, Point2::new(3.0, -4.0));
    }

    #[test]
    fn conversions() {
        assert_eq!(Point2::from((1.0f32, 2.0f32)), Point2::new(1.0, 2.0));
        assert_eq!(Point2::from([3.0f64, 4.0]).to_tuple(), (3.0, 4.0));
    }
}
