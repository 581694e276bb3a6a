//! Axis-aligned bounding box.

use crate::error::MapError;
use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Derived from a point set and never edited independently of it: when the
/// points change, compute a new box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the larger of width and height.
    #[inline]
    pub fn max_dim(self) -> F {
        self.width().max(self.height())
    }

    /// Returns the area of the AABB.
    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the union of two AABBs (smallest AABB containing both).
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// Computes the bounding box of a point set.
///
/// # Errors
///
/// Returns [`MapError::EmptyGeometry`] if `points` is empty.
///
/// # Example
///
/// ```
/// use mapshape::{bounding_box, Point2};
///
/// let bbox = bounding_box(&[Point2::new(1.0, 2.0), Point2::new(4.0, -1.0)]).unwrap();
/// assert_eq!(bbox.width(), 3.0);
/// assert_eq!(bbox.height(), 3.0);
/// assert_eq!(bbox.max_dim(), 3.0);
/// ```
pub fn bounding_box<F: Float>(points: &[Point2<F>]) -> Result<Aabb2<F>, MapError> {
    Aabb2::from_points(points.iter().copied()).ok_or(MapError::EmptyGeometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min.x, -3.0);
        assert_eq!(aabb.min.y, -1.0);
        assert_eq!(aabb.max.x, 4.0);
        assert_eq!(aabb.max.y, 5.0);
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 5.0);
        assert_eq!(aabb.max_dim(), 10.0);
        assert_eq!(aabb.area(), 50.0);
    }

    #[test]
    fn test_max_dim_tall() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 7.0));
        assert_eq!(aabb.max_dim(), 7.0);
    }

    #[test]
    fn test_union() {
        let a: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
        let b = Aabb2::new(Point2::new(3.0, 3.0), Point2::new(10.0, 10.0));
        let u = a.union(b);

        assert_eq!(u.min, Point2::new(0.0, 0.0));
        assert_eq!(u.max, Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_bounding_box_single_point() {
        let bbox = bounding_box(&[Point2::new(2.0_f64, 3.0)]).unwrap();
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert_eq!(bbox.max_dim(), 0.0);
    }

    #[test]
    fn test_bounding_box_empty_is_error() {
        let points: [Point2<f64>; 0] = [];
        assert_eq!(bounding_box(&points), Err(MapError::EmptyGeometry));
    }
}
