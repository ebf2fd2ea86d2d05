//! Planar Delaunay triangulation
//!
//! Incremental Bowyer-Watson triangulation of 2-D point sets, with exact
//! geometric value types and an indexed mesh export for rendering.
//!
//! # Quick Start
//!
//! ```rust
//! use rust_planar_delaunay::*;
//!
//! let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
//! let points = random_points(200, bounds, 42);
//!
//! let mut delaunay = Delaunay::new();
//! let triangles = delaunay.triangulate(&points).unwrap();
//! println!("Generated {} triangles", triangles.len());
//!
//! // Indexed mesh for rendering
//! let mesh = generate_mesh_ccw(delaunay.triangles());
//! assert_eq!(mesh.triangle_count(), delaunay.triangles().len());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for geometry and configuration types

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod generation;
pub mod triangulator;
pub mod mesh;

// Re-export core types for convenience
pub use error::{DelaunayError, Result};
pub use config::{DuplicatePolicy, TriangulatorConfig, TriangulatorConfigBuilder};
pub use geometry::{Bounds, Edge, Point, Triangle};
pub use generation::{jittered_grid, random_points};
pub use triangulator::{triangulate, Delaunay};
pub use mesh::{generate_mesh, generate_mesh_ccw, MeshData};

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
