//! Deterministic point set generation
//!
//! Seeded generators for feeding the triangulator in tests, benchmarks and
//! demos. Every generator uses `ChaCha8Rng`, so a seed yields the same points
//! on every platform.

mod grid;
mod random;

pub use grid::jittered_grid;
pub use random::random_points;
