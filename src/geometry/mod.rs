//! Geometric value types
//!
//! Points compare exactly. Edges and triangles compare by their unordered
//! vertex sets, which is what the cavity bookkeeping in the triangulator
//! relies on.

mod bounds;
mod edge;
mod point;
mod triangle;

pub use bounds::Bounds;
pub use edge::Edge;
pub use point::Point;
pub(crate) use point::{point_key, power_of_two_scale};
pub use triangle::Triangle;
