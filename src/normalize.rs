//! Coordinate normalization into a fixed canvas frame.
//!
//! Projected map coordinates are large (metres) and have Y growing north.
//! Drawing them needs the opposite Y direction and a small, origin-anchored
//! frame. These helpers operate in place on a caller-owned buffer.

use crate::bounds::Aabb2;
use crate::error::MapError;
use crate::primitives::Point2;
use num_traits::Float;

/// Default edge length of the canvas that shapes are scaled into.
pub const DEFAULT_CANVAS_SIZE: f64 = 100.0;

/// Translates and scales points into a canvas frame.
///
/// `bbox.min` moves to the origin and the larger bounding-box dimension is
/// scaled to `canvas_size`, preserving the aspect ratio. When the box has
/// no extent the points are only translated.
///
/// # Example
///
/// ```
/// use mapshape::{bounding_box, normalize_to_canvas, Point2};
///
/// let mut points = vec![Point2::new(1000.0, 500.0), Point2::new(3000.0, 1500.0)];
/// let bbox = bounding_box(&points).unwrap();
/// normalize_to_canvas(&mut points, &bbox, 100.0);
///
/// assert_eq!(points[0], Point2::new(0.0, 0.0));
/// assert_eq!(points[1], Point2::new(100.0, 50.0));
/// ```
pub fn normalize_to_canvas<F: Float>(points: &mut [Point2<F>], bbox: &Aabb2<F>, canvas_size: F) {
    let offset = bbox.min.to_vec();
    let max_dim = bbox.max_dim();
    let scale = if max_dim > F::zero() {
        canvas_size / max_dim
    } else {
        F::one()
    };

    for p in points.iter_mut() {
        let shifted = *p - offset;
        *p = Point2::new(shifted.x * scale, shifted.y * scale);
    }
}

/// Negates the Y coordinate of every point.
///
/// Latitude grows northward while SVG's Y axis grows downward.
pub fn mirror_y<F: Float>(points: &mut [Point2<F>]) {
    for p in points.iter_mut() {
        p.y = -p.y;
    }
}

/// Checks that every coordinate is finite.
///
/// # Errors
///
/// Returns [`MapError::NonFiniteCoordinate`] naming the first bad point.
pub fn ensure_finite<F: Float>(points: &[Point2<F>]) -> Result<(), MapError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(MapError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
