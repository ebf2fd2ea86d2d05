//! Indexed mesh output
//!
//! Converts a triangle list into shared vertex positions plus index triples,
//! the layout vertex buffers expect.

use std::collections::{HashMap, HashSet};

use crate::geometry::{point_key, Triangle};

/// Engine-agnostic indexed triangle mesh
///
/// Each distinct vertex is stored once in `positions`, in order of first
/// appearance. Every three entries of `indices` form one triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions
    pub positions: Vec<[f64; 2]>,
    /// Triangle indices into `positions`
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Every undirected edge once, as `(low, high)` index pairs
    ///
    /// Order follows the first triangle that uses each edge.
    pub fn edge_indices(&self) -> Vec<(u32, u32)> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    edges.push(key);
                }
            }
        }
        edges
    }
}

/// Build an indexed mesh, keeping each triangle's `p1, p2, p3` order
///
/// # Example
///
/// ```
/// use rust_planar_delaunay::*;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let triangles = triangulate(&points).unwrap();
/// let mesh = generate_mesh(&triangles);
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// assert_eq!(mesh.edge_indices().len(), 5);
/// ```
pub fn generate_mesh(triangles: &[Triangle]) -> MeshData {
    build_mesh(triangles, false)
}

/// Build an indexed mesh with every triangle wound counter-clockwise
pub fn generate_mesh_ccw(triangles: &[Triangle]) -> MeshData {
    build_mesh(triangles, true)
}

fn build_mesh(triangles: &[Triangle], counter_clockwise: bool) -> MeshData {
    let mut mesh = MeshData {
        positions: Vec::new(),
        indices: Vec::with_capacity(triangles.len() * 3),
    };
    let mut index_of: HashMap<(u64, u64), u32> = HashMap::new();

    for triangle in triangles {
        let [p1, p2, p3] = triangle.vertices();
        let ordered = if counter_clockwise && triangle.signed_area() < 0.0 {
            [p1, p3, p2]
        } else {
            [p1, p2, p3]
        };

        for p in ordered {
            let index = *index_of.entry(point_key(p)).or_insert_with(|| {
                mesh.positions.push([p.x, p.y]);
                (mesh.positions.len() - 1) as u32
            });
            mesh.indices.push(index);
        }
    }

    mesh
}
