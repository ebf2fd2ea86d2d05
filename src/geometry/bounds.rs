//! Axis-aligned bounding rectangle

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;

/// Axis-aligned rectangle given by its minimum and maximum corners
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Corner with the smallest coordinates
    pub min: Point,
    /// Corner with the largest coordinates
    pub max: Point,
}

impl Bounds {
    /// Create bounds from two corners
    ///
    /// The corners may be given in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest bounds containing every point, or `None` for an empty slice
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self { min: *first, max: *first };
        for p in rest {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    /// Extent along x
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the rectangle
    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }

    /// Check whether `point` lies inside or on the border
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = [
            Point::new(1.0, 5.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -1.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.min, Point::new(-2.0, -1.0));
        assert_eq!(bounds.max, Point::new(4.0, 5.0));
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.center(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_from_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_new_orders_corners() {
        let bounds = Bounds::new(Point::new(3.0, 0.0), Point::new(1.0, 2.0));
        assert_eq!(bounds.min, Point::new(1.0, 0.0));
        assert_eq!(bounds.max, Point::new(3.0, 2.0));
        assert!(bounds.contains(Point::new(2.0, 1.0)));
        assert!(bounds.contains(Point::new(3.0, 2.0)));
        assert!(!bounds.contains(Point::new(3.5, 1.0)));
    }
}
