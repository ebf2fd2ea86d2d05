//! Triangle with cached edges and circumcircle

use glam::DVec2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{power_of_two_scale, Edge, Point};
use crate::error::{DelaunayError, Result};

/// A non-degenerate triangle
///
/// The three edges `e1 = (p1, p2)`, `e2 = (p2, p3)` and `e3 = (p3, p1)` and the
/// circumcircle are computed once in [`Triangle::new`]. Construction rejects
/// collinear vertices, so every `Triangle` has a finite circumcenter and a
/// positive circumradius.
///
/// Equality compares the vertex sets and ignores which vertex is labelled
/// `p1`, `p2` or `p3`.
///
/// # Example
///
/// ```
/// use rust_planar_delaunay::{Point, Triangle};
///
/// let t = Triangle::new(
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(0.0, 4.0),
/// ).unwrap();
///
/// assert_eq!(t.circumcenter(), Point::new(2.0, 2.0));
/// assert!(t.circumcircle_contains(Point::new(1.0, 1.0)));
/// assert!(!t.circumcircle_contains(Point::new(4.0, 4.0))); // on the circle
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[Point; 3]", into = "[Point; 3]"))]
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    p1: Point,
    p2: Point,
    p3: Point,
    e1: Edge,
    e2: Edge,
    e3: Edge,
    circumcenter: DVec2,
    /// Squared radius in units of `scale`
    radius_squared: f64,
    scale: f64,
}

impl Triangle {
    /// Create a triangle from three points
    ///
    /// # Errors
    ///
    /// Returns `DegenerateTriangle` if the points are collinear or the
    /// circumcircle cannot be represented with finite values.
    pub fn new(p1: Point, p2: Point, p3: Point) -> Result<Self> {
        let degenerate = || DelaunayError::DegenerateTriangle { a: p1, b: p2, c: p3 };

        // Work relative to p1, scaled to unit size so squared lengths neither
        // overflow nor underflow
        let origin = p1.as_dvec2();
        let b = p2.as_dvec2() - origin;
        let c = p3.as_dvec2() - origin;
        let scale = power_of_two_scale(b.abs().max_element().max(c.abs().max_element()))
            .ok_or_else(degenerate)?;
        let b = b / scale;
        let c = c / scale;

        let d = 2.0 * b.perp_dot(c);
        if d == 0.0 || !d.is_finite() {
            return Err(degenerate());
        }

        let b_len = b.length_squared();
        let c_len = c.length_squared();
        let offset = DVec2::new(c.y * b_len - b.y * c_len, b.x * c_len - c.x * b_len) / d;

        let circumcenter = origin + offset * scale;
        let radius_squared = offset.length_squared();
        if !circumcenter.is_finite() || !radius_squared.is_finite() || radius_squared <= 0.0 {
            return Err(degenerate());
        }

        Ok(Self {
            p1,
            p2,
            p3,
            e1: Edge::new(p1, p2),
            e2: Edge::new(p2, p3),
            e3: Edge::new(p3, p1),
            circumcenter,
            radius_squared,
            scale,
        })
    }

    /// First vertex
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// Second vertex
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Third vertex
    #[inline]
    pub fn p3(&self) -> Point {
        self.p3
    }

    /// The three vertices in construction order
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// The edges `(p1, p2)`, `(p2, p3)`, `(p3, p1)`
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [self.e1, self.e2, self.e3]
    }

    /// Center of the circumscribed circle
    #[inline]
    pub fn circumcenter(&self) -> Point {
        self.circumcenter.into()
    }

    /// Radius of the circumscribed circle
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.radius_squared.sqrt() * self.scale
    }

    /// Check whether `point` lies strictly inside the circumcircle
    ///
    /// Points exactly on the circle are outside. There is no tolerance band.
    #[inline]
    pub fn circumcircle_contains(&self, point: Point) -> bool {
        ((point.as_dvec2() - self.circumcenter) / self.scale).length_squared() < self.radius_squared
    }

    /// Check whether `point` is exactly one of the vertices
    #[inline]
    pub fn contains_vertex(&self, point: Point) -> bool {
        self.p1 == point || self.p2 == point || self.p3 == point
    }

    /// Area, positive for counter-clockwise vertex order
    pub fn signed_area(&self) -> f64 {
        let origin = self.p1.as_dvec2();
        0.5 * (self.p2.as_dvec2() - origin).perp_dot(self.p3.as_dvec2() - origin)
    }

    /// Unsigned area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.vertices().iter().all(|&v| other.contains_vertex(v))
            && other.vertices().iter().all(|&v| self.contains_vertex(v))
    }
}

impl TryFrom<[Point; 3]> for Triangle {
    type Error = DelaunayError;

    fn try_from([p1, p2, p3]: [Point; 3]) -> Result<Self> {
        Self::new(p1, p2, p3)
    }
}

impl From<Triangle> for [Point; 3] {
    fn from(t: Triangle) -> Self {
        t.vertices()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle {{ {}, {}, {} }}", self.p1, self.p2, self.p3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        )
        .unwrap()
    }

    #[test]
    fn test_edges_follow_vertex_order() {
        let t = right_triangle();
        let [e1, e2, e3] = t.edges();
        assert_eq!(e1.p1, t.p1());
        assert_eq!(e1.p2, t.p2());
        assert_eq!(e2.p1, t.p2());
        assert_eq!(e2.p2, t.p3());
        assert_eq!(e3.p1, t.p3());
        assert_eq!(e3.p2, t.p1());
    }

    #[test]
    fn test_circumcircle() {
        let t = right_triangle();
        assert_eq!(t.circumcenter(), Point::new(2.0, 2.0));
        assert_eq!(t.circumradius(), 8.0_f64.sqrt());
    }

    #[test]
    fn test_circumcircle_contains_is_strict() {
        let t = right_triangle();
        assert!(t.circumcircle_contains(Point::new(2.0, 2.0)));
        assert!(t.circumcircle_contains(Point::new(3.9, 3.9)));
        // Cocircular point sits exactly on the circle
        assert!(!t.circumcircle_contains(Point::new(4.0, 4.0)));
        // Vertices are on the circle too
        assert!(!t.circumcircle_contains(Point::new(0.0, 0.0)));
        assert!(!t.circumcircle_contains(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_circumcircle_at_extreme_scales() {
        for scale in [1e-300, 1e-150, 1e150, 1e200] {
            let t = Triangle::new(
                Point::new(0.0, 0.0),
                Point::new(4.0 * scale, 0.0),
                Point::new(0.0, 4.0 * scale),
            )
            .unwrap();
            let center = t.circumcenter();
            assert!((center.x / scale - 2.0).abs() < 1e-12, "scale {scale}");
            assert!((center.y / scale - 2.0).abs() < 1e-12, "scale {scale}");
            assert!((t.circumradius() / scale - 8.0_f64.sqrt()).abs() < 1e-12);
            assert!(t.circumcircle_contains(Point::new(scale, scale)));
            assert!(!t.circumcircle_contains(Point::new(5.0 * scale, 5.0 * scale)));
        }
    }

    #[test]
    fn test_collinear_is_rejected() {
        let result = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        );
        assert!(matches!(result, Err(DelaunayError::DegenerateTriangle { .. })));

        let a = Point::new(1.0, 1.0);
        assert!(Triangle::new(a, a, Point::new(2.0, 3.0)).is_err());
    }

    #[test]
    fn test_equality_ignores_rotation_and_reflection() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 4.0);
        let abc = Triangle::new(a, b, c).unwrap();
        assert_eq!(abc, Triangle::new(c, a, b).unwrap());
        assert_eq!(abc, Triangle::new(b, a, c).unwrap());

        let abd = Triangle::new(a, b, Point::new(1.0, 4.0)).unwrap();
        assert_ne!(abc, abd);
    }

    #[test]
    fn test_contains_vertex() {
        let t = right_triangle();
        assert!(t.contains_vertex(Point::new(4.0, 0.0)));
        assert!(!t.contains_vertex(Point::new(4.0, 4.0)));
    }

    #[test]
    fn test_area() {
        let t = right_triangle();
        assert_eq!(t.signed_area(), 8.0);
        let cw = Triangle::new(t.p1(), t.p3(), t.p2()).unwrap();
        assert_eq!(cw.signed_area(), -8.0);
        assert_eq!(cw.area(), 8.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_vertices() {
        let t = right_triangle();
        let json = serde_json::to_string(&t).unwrap();
        let restored: Triangle = serde_json::from_str(&json).unwrap();
        assert_eq!(t, restored);
        assert_eq!(t.circumcenter(), restored.circumcenter());

        let collinear = r#"[{"x":0.0,"y":0.0},{"x":1.0,"y":0.0},{"x":2.0,"y":0.0}]"#;
        assert!(serde_json::from_str::<Triangle>(collinear).is_err());
    }
}
