//! Splitting flat shape buffers into rings and dropping negligible ones.
//!
//! Shapefile polygons store every ring of a shape in a single point buffer,
//! with a list of offsets marking where each ring (part) starts. Country
//! outlines carry many tiny islands and slivers; [`split_and_filter`] keeps
//! only the rings that contribute a meaningful fraction of the total area.

use super::core::{polygon_area, Polygon, MIN_POLYGON_VERTICES};
use crate::error::MapError;
use crate::primitives::Point2;
use num_traits::Float;

/// Splits a flat point buffer into parts at the given start offsets.
///
/// Offsets must be strictly increasing and smaller than `points.len()`. The
/// first part always starts at index 0, so a leading offset of `0` is
/// accepted and ignored. The last part runs to the end of the buffer. With
/// no offsets, the whole buffer is a single part.
///
/// # Errors
///
/// Returns [`MapError::InvalidPartOffsets`] if an offset is out of range or
/// not greater than its predecessor.
pub fn split_parts<'a, F: Float>(
    points: &'a [Point2<F>],
    part_offsets: &[usize],
) -> Result<Vec<&'a [Point2<F>]>, MapError> {
    let len = points.len();
    let mut parts = Vec::with_capacity(part_offsets.len() + 1);
    let mut start = 0;

    for (i, &offset) in part_offsets.iter().enumerate() {
        if i == 0 && offset == 0 {
            continue;
        }
        if offset <= start || offset >= len {
            return Err(MapError::InvalidPartOffsets { offset, len });
        }
        parts.push(&points[start..offset]);
        start = offset;
    }
    parts.push(&points[start..]);

    Ok(parts)
}

/// Splits a shape into polygons and discards those below an area fraction.
///
/// A part survives when its area is strictly greater than
/// `area_threshold_fraction * total_area`, where `total_area` is the sum of
/// all part areas. A shape with zero total area (e.g. collinear points)
/// yields no polygons.
///
/// Parts with fewer than three points are never polygons and are always
/// dropped. With a negative fraction, zero-area rings of three or more
/// points (collinear runs) pass the area test and are kept.
///
/// # Errors
///
/// Returns [`MapError::InvalidPartOffsets`] for malformed offsets.
///
/// # Example
///
/// ```
/// use mapshape::{split_and_filter, Point2};
///
/// let mut points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
/// // A tiny island next to the main square
/// points.extend([
///     Point2::new(20.0, 20.0),
///     Point2::new(20.1, 20.0),
///     Point2::new(20.1, 20.1),
/// ]);
///
/// let polygons = split_and_filter(&points, &[4], 0.01).unwrap();
/// assert_eq!(polygons.len(), 1);
/// assert_eq!(polygons[0].len(), 4);
/// ```
pub fn split_and_filter<F: Float>(
    points: &[Point2<F>],
    part_offsets: &[usize],
    area_threshold_fraction: F,
) -> Result<Vec<Polygon<F>>, MapError> {
    let parts = split_parts(points, part_offsets)?;
    let areas: Vec<F> = parts.iter().map(|part| polygon_area(part)).collect();
    let total_area = areas.iter().fold(F::zero(), |acc, &a| acc + a);
    let min_area = area_threshold_fraction * total_area;
    let part_count = parts.len();

    let polygons = parts
        .into_iter()
        .zip(areas)
        .filter(|&(part, area)| part.len() >= MIN_POLYGON_VERTICES && area > min_area)
        .map(|(part, _)| Polygon::from_vertices_unchecked(part.to_vec()))
        .collect::<Vec<_>>();

    tracing::trace!(
        parts = part_count,
        kept = polygons.len(),
        "filtered shape parts by area"
    );

    Ok(polygons)
}
