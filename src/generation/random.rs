//! Uniform random point sets

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::geometry::{Bounds, Point};

/// Generate points uniformly distributed inside a rectangle
///
/// The same seed always produces the same sequence, which keeps tests and
/// benchmarks reproducible.
///
/// # Arguments
///
/// * `count` - Number of points to generate
/// * `bounds` - Rectangle the points are drawn from
/// * `seed` - Random seed
///
/// # Example
///
/// ```rust
/// use rust_planar_delaunay::{random_points, Bounds, Point};
///
/// let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
/// let points = random_points(100, bounds, 42);
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|&p| bounds.contains(p)));
/// ```
pub fn random_points(count: usize, bounds: Bounds, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (width, height) = (bounds.width(), bounds.height());

    (0..count)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            Point::new(bounds.min.x + u * width, bounds.min.y + v * height)
        })
        .collect()
}
