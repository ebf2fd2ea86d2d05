//! Planar point value type

use glam::DVec2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the plane
///
/// Equality is exact on both coordinates. There is no tolerance: two points
/// that differ in the last bit are different vertices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        self.as_dvec2().distance_squared(other.as_dvec2())
    }

    /// Both coordinates are neither NaN nor infinite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// View this point as a glam vector
    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Hash key matching exact `Point` equality (`-0.0` and `0.0` share a key)
pub(crate) fn point_key(p: Point) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

/// Largest power of two not above `magnitude`, or `None` for zero or non-finite input
///
/// Dividing by a power of two only shifts the exponent, so predicates can work
/// on unit-sized values without changing which side of a circle a point lands.
pub(crate) fn power_of_two_scale(magnitude: f64) -> Option<f64> {
    let magnitude = magnitude.abs();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return None;
    }
    let bits = magnitude.to_bits();
    let exponent = bits & (0x7ff << 52);
    if exponent == 0 {
        // Subnormal: keep only the highest mantissa bit
        Some(f64::from_bits(1u64 << (63 - bits.leading_zeros())))
    } else {
        Some(f64::from_bits(exponent))
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.as_dvec2()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.0 + f64::EPSILON * 2.0));
    }

    #[test]
    fn test_distance_squared() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance_squared(a), 25.0);
    }

    #[test]
    fn test_conversions() {
        let p = Point::from([3.0, -1.5]);
        assert_eq!(p, Point::new(3.0, -1.5));
        assert_eq!(DVec2::from(p), DVec2::new(3.0, -1.5));
        assert_eq!(<[f64; 2]>::from(p), [3.0, -1.5]);
    }

    #[test]
    fn test_point_key_merges_signed_zero() {
        assert_eq!(point_key(Point::new(-0.0, 1.0)), point_key(Point::new(0.0, 1.0)));
        assert_ne!(point_key(Point::new(1.0, 0.0)), point_key(Point::new(0.0, 1.0)));
    }

    #[test]
    fn test_power_of_two_scale() {
        assert_eq!(power_of_two_scale(1.0), Some(1.0));
        assert_eq!(power_of_two_scale(3.0), Some(2.0));
        assert_eq!(power_of_two_scale(-0.75), Some(0.5));
        assert_eq!(power_of_two_scale(1e300), Some(2f64.powi(996)));
        // Smallest subnormal is itself a power of two
        assert_eq!(power_of_two_scale(f64::from_bits(1)), Some(f64::from_bits(1)));
        assert_eq!(power_of_two_scale(f64::from_bits(5)), Some(f64::from_bits(4)));
        assert_eq!(power_of_two_scale(0.0), None);
        assert_eq!(power_of_two_scale(f64::INFINITY), None);
        assert_eq!(power_of_two_scale(f64::NAN), None);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(0.0, 1.0).is_finite());
        assert!(!Point::new(f64::NAN, 1.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
