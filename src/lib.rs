//! mapshape - Area-preserving simplification of map boundary polygons
//!
//! Country and state outlines from shapefiles carry far more detail than a
//! small drawing needs. This library splits shape buffers into rings, drops
//! negligible islands, merges vertex pairs whose collapse barely changes the
//! enclosed area, and renders the result as SVG.
//!
//! The geometry core is pure and re-entrant; only [`batch`] spawns threads.

pub mod batch;
pub mod bounds;
pub mod error;
pub mod io;
pub mod normalize;
pub mod polygon;
pub mod primitives;
pub mod project;
pub mod render;
pub mod simplify;

pub use batch::{render_batch, BatchError, BatchReport, JobResult};
pub use bounds::{bounding_box, Aabb2};
pub use error::MapError;
pub use normalize::{mirror_y, normalize_to_canvas};
pub use polygon::{cyclic_pairwise_distance, polygon_area, split_and_filter, Polygon};
pub use primitives::{Point2, Vec2};
pub use project::{Equirectangular, Identity, Mercator, Projection};
pub use render::{
    render_shape, RenderError, RenderOptions, RenderedShape, ShapeJob, ShapeKind, SimplifyLevel,
};
pub use simplify::{compute_merge_costs, simplify, simplify_with, SimplifyConfig, SimplifyOutcome};
