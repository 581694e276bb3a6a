//! Bounding volume computation.

mod aabb;

pub use aabb::{bounding_box, Aabb2};
