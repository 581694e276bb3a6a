//! Core polygon types and basic operations.

use crate::bounds::Aabb2;
use crate::error::MapError;
use crate::primitives::Point2;
use num_traits::Float;

/// Minimum number of vertices for a non-degenerate polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed: the last vertex connects to the first.
/// It always holds at least [`MIN_POLYGON_VERTICES`] vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::DegeneratePolygon`] for fewer than three vertices.
    pub fn new(vertices: Vec<Point2<F>>) -> Result<Self, MapError> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(MapError::DegeneratePolygon {
                len: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Wraps vertices already known to satisfy the vertex minimum.
    #[inline]
    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point2<F>>) -> Self {
        debug_assert!(vertices.len() >= MIN_POLYGON_VERTICES);
        Self { vertices }
    }

    /// Returns the vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Consumes the polygon and returns its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<F>> {
        self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    ///
    /// A constructed polygon is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the perimeter of the polygon, closing edge included.
    pub fn perimeter(&self) -> F {
        cyclic_pairwise_distance(&self.vertices)
            .into_iter()
            .fold(F::zero(), |acc, d| acc + d)
    }

    /// Returns the bounding box of the vertices.
    pub fn bounding_box(&self) -> Aabb2<F> {
        let first = Aabb2::from_point(self.vertices[0]);
        self.vertices[1..]
            .iter()
            .fold(first, |bbox, &p| bbox.expand_to_include(p))
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding. Fewer than three
/// vertices enclose nothing and yield zero.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return F::zero();
    }

    let n = vertices.len();
    let mut area = F::zero();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / (F::one() + F::one())
}

/// Computes the absolute area of a polygon.
///
/// Collinear input yields zero rather than an error.
///
/// # Example
///
/// ```
/// use mapshape::{polygon_area, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
/// assert_eq!(polygon_area(&square), 100.0);
/// ```
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Computes the area of the triangle formed by three points.
///
/// Returns the absolute value of the signed area.
#[inline]
pub fn triangle_area<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a).abs() / (F::one() + F::one())
}

/// Returns the distance from each vertex to its cyclic successor.
///
/// `result[i]` is the length of the edge from `vertices[i]` to
/// `vertices[(i + 1) % n]`, so the result has one entry per vertex.
pub fn cyclic_pairwise_distance<F: Float>(vertices: &[Point2<F>]) -> Vec<F> {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].distance(vertices[(i + 1) % n]))
        .collect()
}

/// Returns the index of the element before `i` in a cycle of length `n`.
#[inline]
pub(crate) fn cyclic_prev(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}
