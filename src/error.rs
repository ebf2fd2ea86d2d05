//! Error types for Delaunay triangulation

use thiserror::Error;

use crate::geometry::Point;

/// Errors that can occur while building triangles or triangulating a point set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelaunayError {
    /// The input point set cannot be triangulated
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Three points are collinear, so their circumcircle is undefined
    #[error("degenerate triangle: {a}, {b}, {c} are collinear")]
    DegenerateTriangle {
        /// First vertex
        a: Point,
        /// Second vertex
        b: Point,
        /// Third vertex
        c: Point,
    },

    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for triangulation operations
pub type Result<T> = std::result::Result<T, DelaunayError>;
