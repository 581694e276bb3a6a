//! Area distortion costs for vertex merges.
//!
//! Merging vertex `j` with its successor moves both to their midpoint `m`.
//! The polygon then loses (or gains) the two triangles swept by that move:
//! `(p[j-1], p[j], m)` on the incoming side and `(m, p[j+1], p[j+2])` on the
//! outgoing side. The cost is the sum of their absolute areas and is stored
//! at index `j`, the vertex that disappears in the merge.

use crate::polygon::core::{cyclic_prev, triangle_area, MIN_POLYGON_VERTICES};
use crate::primitives::Point2;
use num_traits::Float;

/// Computes the merge cost for every vertex of a closed polygon.
///
/// `costs[j]` is the area distortion caused by collapsing `vertices[j]` and
/// `vertices[(j + 1) % n]` into their midpoint. Polygons with fewer than four
/// vertices have no four-vertex window to evaluate and get all-zero costs;
/// such polygons are never merged further.
///
/// # Example
///
/// ```
/// use mapshape::{compute_merge_costs, Point2};
///
/// // Vertex 1 sits on the bottom edge, so merging it forward is cheaper
/// // than merging two corners
/// let poly = [
///     Point2::new(0.0, 0.0),
///     Point2::new(5.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
/// let costs = compute_merge_costs(&poly);
/// assert_eq!(costs.len(), 5);
/// assert!(costs[1] < costs[3]);
/// ```
pub fn compute_merge_costs<F: Float>(vertices: &[Point2<F>]) -> Vec<F> {
    let n = vertices.len();
    if n <= MIN_POLYGON_VERTICES {
        return vec![F::zero(); n];
    }

    (0..n).map(|j| merge_cost_at(vertices, j)).collect()
}

/// Merge cost of the pair `(j, j + 1)`. Requires at least four vertices.
#[inline]
fn merge_cost_at<F: Float>(vertices: &[Point2<F>], j: usize) -> F {
    let n = vertices.len();
    let before = vertices[cyclic_prev(j, n)];
    let a = vertices[j];
    let b = vertices[(j + 1) % n];
    let after = vertices[(j + 2) % n];

    let m = a.midpoint(b);
    triangle_area(before, a, m) + triangle_area(m, b, after)
}

/// Computes the cost of deleting each vertex outright.
///
/// `costs[i]` is the area of the triangle `(p[i-1], p[i], p[i+1])`, the
/// region lost when vertex `i` is dropped and its neighbours are joined.
/// Polygons with three or fewer vertices get all-zero costs.
pub fn delete_costs<F: Float>(vertices: &[Point2<F>]) -> Vec<F> {
    let n = vertices.len();
    if n <= MIN_POLYGON_VERTICES {
        return vec![F::zero(); n];
    }

    (0..n)
        .map(|i| triangle_area(vertices[cyclic_prev(i, n)], vertices[i], vertices[(i + 1) % n]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_square_costs_are_symmetric() {
        // Each merge of two square corners cuts off two right triangles
        // with legs 10 and 5: 2 * 25 = 50.
        let costs = compute_merge_costs(&square());
        assert_eq!(costs.len(), 4);
        for c in costs {
            assert_relative_eq!(c, 50.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cost_index_convention() {
        // Vertices 1 and 2 are nearly coincident on the bottom edge: the
        // cheap merge is the pair (1, 2), stored at index 1.
        let poly = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.1, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let costs = compute_merge_costs(&poly);
        assert_relative_eq!(costs[1], 0.0, epsilon = 1e-10);
        assert!(costs[4] > 1.0);
    }

    #[test]
    fn test_cost_matches_hand_computation() {
        let poly = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(8.0, 0.0),
            Point2::new(8.0, 8.0),
            Point2::new(0.0, 8.0),
        ];
        let costs = compute_merge_costs(&poly);

        // Pair (1, 2): m = (6, 1)
        let m = Point2::new(6.0, 1.0);
        let expected = triangle_area(poly[0], poly[1], m) + triangle_area(m, poly[2], poly[3]);
        assert_relative_eq!(costs[1], expected, epsilon = 1e-12);

        // Pair (4, 0) wraps around: window (3, 4, 0, 1)
        let m = poly[4].midpoint(poly[0]);
        let expected = triangle_area(poly[3], poly[4], m) + triangle_area(m, poly[0], poly[1]);
        assert_relative_eq!(costs[4], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_merge_is_free() {
        let poly = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
        ];
        let costs = compute_merge_costs(&poly);
        // Window (0, 1, 2, 3) lies on one line
        assert_relative_eq!(costs[1], 0.0, epsilon = 1e-12);
        // Window (4, 0, 1, 2) bends at vertex 0
        assert!(costs[0] > 0.0);
    }

    #[test]
    fn test_small_polygons_get_zero_costs() {
        let tri = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert_eq!(compute_merge_costs(&tri), vec![0.0; 3]);
        assert!(compute_merge_costs::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_delete_costs() {
        let mut poly = square();
        poly.insert(1, Point2::new(5.0, 1.0));
        let costs = delete_costs(&poly);
        assert_eq!(costs.len(), 5);
        // Dropping the bump restores the straight bottom edge
        assert_relative_eq!(costs[1], 5.0, epsilon = 1e-12);
        // Dropping a corner of the square removes half of it
        assert_relative_eq!(costs[3], 50.0, epsilon = 1e-12);
    }
}
