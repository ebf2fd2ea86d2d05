//! Jittered grid point sets
//!
//! A regular grid is full of cocircular quadruples, which the exact
//! circumcircle test resolves arbitrarily. A small random offset per point
//! puts the grid in general position while keeping the spacing even.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::geometry::Point;

/// Generate a `columns x rows` grid with random per-point jitter
///
/// Point `(i, j)` starts at `(i * spacing, j * spacing)` and is moved by up to
/// `jitter * spacing / 2` along each axis. `jitter` is clamped to `[0, 1]`.
///
/// Points are emitted row by row.
///
/// # Example
///
/// ```rust
/// use rust_planar_delaunay::jittered_grid;
///
/// let points = jittered_grid(4, 3, 1.0, 0.2, 42);
/// assert_eq!(points.len(), 12);
/// ```
pub fn jittered_grid(columns: usize, rows: usize, spacing: f64, jitter: f64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let half_range = jitter.clamp(0.0, 1.0) * spacing / 2.0;

    let mut points = Vec::with_capacity(columns * rows);
    for j in 0..rows {
        for i in 0..columns {
            let dx = (rng.gen::<f64>() * 2.0 - 1.0) * half_range;
            let dy = (rng.gen::<f64>() * 2.0 - 1.0) * half_range;
            points.push(Point::new(i as f64 * spacing + dx, j as f64 * spacing + dy));
        }
    }
    points
}
