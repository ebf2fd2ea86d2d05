//! Undirected edge between two points

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Point;

/// An unordered pair of points
///
/// `Edge::new(a, b) == Edge::new(b, a)`. The endpoints are kept in the order
/// they were given so that callers building triangles from an edge preserve
/// the winding of the triangle it came from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// First endpoint
    pub p1: Point,
    /// Second endpoint
    pub p2: Point,
}

impl Edge {
    /// Create an edge between two points
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.p1.distance_squared(self.p2).sqrt()
    }

    /// Check whether `point` is one of the endpoints
    #[inline]
    pub fn contains_vertex(&self, point: Point) -> bool {
        self.p1 == point || self.p2 == point
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.p1, self.p2)
    }
}
