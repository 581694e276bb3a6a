//! Iterative area-threshold vertex merging.
//!
//! Each pass computes merge costs for the current polygon, then sweeps the
//! vertices in order and folds every cheap vertex into its successor. A
//! vertex takes part in at most one merge per pass. Passes repeat on the
//! compacted result until they stop paying off or the iteration cap is hit.
//!
//! Time complexity: O(n) per pass, at most `max_iterations` passes.

use super::merge_cost::compute_merge_costs;
use crate::polygon::core::MIN_POLYGON_VERTICES;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// Default cap on the number of merge passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 16;

/// Default minimum number of vertices a pass must remove to keep going.
pub const DEFAULT_MIN_SIZE_DELTA: usize = 1;

/// Parameters for [`simplify_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyConfig<F> {
    /// Largest area change a single merge may cause, in squared coordinate
    /// units. Merges with a cost strictly below this value are applied.
    pub distortion_threshold: F,
    /// Maximum number of passes.
    pub max_iterations: usize,
    /// A pass removing fewer vertices than this ends the simplification.
    pub min_size_delta_to_continue: usize,
}

impl<F: Float> SimplifyConfig<F> {
    /// Creates a configuration with default iteration limits.
    pub fn new(distortion_threshold: F) -> Self {
        Self {
            distortion_threshold,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_size_delta_to_continue: DEFAULT_MIN_SIZE_DELTA,
        }
    }

    /// Sets the maximum number of passes.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the minimum per-pass vertex reduction needed to continue.
    pub fn with_min_size_delta(mut self, min_size_delta_to_continue: usize) -> Self {
        self.min_size_delta_to_continue = min_size_delta_to_continue;
        self
    }
}

/// Result of [`simplify_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyOutcome<F> {
    /// The simplified polygon.
    pub polygon: Polygon<F>,
    /// Number of merge passes that ran.
    pub iterations: usize,
    /// Vertex count before the first pass followed by the count after each
    /// pass. Non-increasing.
    pub sizes: Vec<usize>,
    /// `true` if a pass fell below the minimum size delta before the
    /// iteration cap was reached.
    pub converged: bool,
}

/// Simplifies a polygon by iteratively merging cheap adjacent vertex pairs.
///
/// # Arguments
///
/// * `polygon` - The input polygon (left untouched)
/// * `distortion_threshold` - Maximum area change allowed per merge
/// * `max_iterations` - Cap on the number of passes
/// * `min_size_delta_to_continue` - Stop once a pass removes fewer vertices
///
/// # Returns
///
/// A polygon with at most as many vertices as the input and never fewer
/// than three.
///
/// # Example
///
/// ```
/// use mapshape::{simplify, Point2, Polygon};
///
/// let circle: Vec<_> = (0..64)
///     .map(|i| {
///         let t = i as f64 / 64.0 * std::f64::consts::TAU;
///         Point2::new(10.0 * t.cos(), 10.0 * t.sin())
///     })
///     .collect();
/// let polygon = Polygon::new(circle).unwrap();
///
/// let simplified = simplify(&polygon, 0.5, 16, 1);
/// assert!(simplified.len() < polygon.len());
/// assert!(simplified.len() >= 3);
/// ```
pub fn simplify<F: Float>(
    polygon: &Polygon<F>,
    distortion_threshold: F,
    max_iterations: usize,
    min_size_delta_to_continue: usize,
) -> Polygon<F> {
    let config = SimplifyConfig {
        distortion_threshold,
        max_iterations,
        min_size_delta_to_continue,
    };
    simplify_with(polygon, &config).polygon
}

/// Simplifies a polygon and reports how the passes went.
pub fn simplify_with<F: Float>(
    polygon: &Polygon<F>,
    config: &SimplifyConfig<F>,
) -> SimplifyOutcome<F> {
    let mut vertices = polygon.vertices().to_vec();
    let mut sizes = Vec::with_capacity(config.max_iterations + 1);
    sizes.push(vertices.len());

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let before = vertices.len();
        vertices = merge_pass(&vertices, config.distortion_threshold);
        iterations += 1;

        let after = vertices.len();
        sizes.push(after);
        tracing::debug!(iteration = iterations, before, after, "merge pass");

        if before - after < config.min_size_delta_to_continue {
            converged = true;
            break;
        }
    }

    SimplifyOutcome {
        polygon: Polygon::from_vertices_unchecked(vertices),
        iterations,
        sizes,
        converged,
    }
}

/// Runs a single merge pass and returns the compacted vertices.
///
/// Every vertex `j` whose merge cost is below `threshold` is folded into its
/// successor: the successor moves to the pair's midpoint and `j` is
/// dropped. A vertex that already absorbed a merge in this pass is not merged
/// again, and the wrap-around merge from the last vertex is skipped when
/// vertex 0 was already removed or moved. Merges stop once only three
/// vertices remain.
///
/// Inputs of three or fewer vertices are returned unchanged.
pub fn merge_pass<F: Float>(vertices: &[Point2<F>], threshold: F) -> Vec<Point2<F>> {
    let n = vertices.len();
    if n <= MIN_POLYGON_VERTICES {
        return vertices.to_vec();
    }

    let costs = compute_merge_costs(vertices);
    let mut points = vertices.to_vec();
    let mut removed = vec![false; n];
    // Set on a vertex once it has absorbed a merge this pass
    let mut absorbed = vec![false; n];
    let mut live = n;

    for j in 0..n {
        if live <= MIN_POLYGON_VERTICES {
            break;
        }
        let cheap = costs[j] < threshold;
        if absorbed[j] || !cheap {
            continue;
        }

        let next = (j + 1) % n;
        if removed[next] || absorbed[next] {
            continue;
        }

        points[next] = points[j].midpoint(points[next]);
        absorbed[next] = true;
        removed[j] = true;
        live -= 1;
    }

    points
        .into_iter()
        .zip(removed)
        .filter_map(|(p, gone)| if gone { None } else { Some(p) })
        .collect()
}
