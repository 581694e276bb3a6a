//! Polygon types, area computation and shape splitting.
//!
//! This module provides:
//! - The [`Polygon`] type, a closed ring of at least three vertices
//! - Shoelace area, triangle area and edge lengths
//! - Splitting shapefile-style point buffers into rings and dropping
//!   negligible ones
//!
//! # Example
//!
//! ```
//! use mapshape::polygon::{split_and_filter, Polygon};
//! use mapshape::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let polygons: Vec<Polygon<f64>> = split_and_filter(&points, &[], 0.001).unwrap();
//! assert_eq!(polygons.len(), 1);
//! assert_eq!(polygons[0].area(), 4.0);
//! ```

pub(crate) mod core;
mod split;

pub use self::core::{
    cyclic_pairwise_distance, polygon_area, polygon_signed_area, triangle_area, Polygon,
    MIN_POLYGON_VERTICES,
};
pub use split::{split_and_filter, split_parts};
