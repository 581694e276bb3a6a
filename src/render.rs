//! Rendering a single map shape to SVG.
//!
//! A [`ShapeJob`] carries the raw geographic points of one country or state
//! together with its part offsets. [`render_shape`] projects them, drops
//! negligible rings, fits the rest into the canvas, simplifies and emits an
//! [`SvgDocument`]. Failures come back as a [`RenderError`] so that the
//! caller can decide whether to skip the shape.

use crate::bounds::Aabb2;
use crate::error::MapError;
use crate::io::{class_slug, SvgDocument};
use crate::normalize::{ensure_finite, mirror_y, normalize_to_canvas, DEFAULT_CANVAS_SIZE};
use crate::polygon::{split_and_filter, Polygon};
use crate::primitives::Point2;
use crate::project::Projection;
use crate::simplify::{
    simplify_with, SimplifyConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_SIZE_DELTA,
};
use thiserror::Error;

/// Default fraction of a shape's total area below which a ring is dropped.
pub const DEFAULT_AREA_THRESHOLD_FRACTION: f64 = 0.001;

/// Errors produced while rendering one shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The shape's geometry was malformed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// Every ring was filtered out or collapsed.
    #[error("nothing to render: no polygon survived filtering")]
    NothingToRender,
}

/// What kind of boundary a shape describes. Used for the CSS class prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    /// A country or map unit outline.
    #[default]
    Country,
    /// A first-level administrative subdivision.
    State,
}

impl ShapeKind {
    /// Returns the CSS class prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Country => "country",
            ShapeKind::State => "state",
        }
    }
}

/// Simplification strength, in parts per million of the bounding-box area.
///
/// The per-merge distortion threshold is `ppm * bbox_area / 1e6`, measured
/// on the normalized canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SimplifyLevel {
    /// No simplification.
    #[default]
    Full,
    /// 1 ppm.
    Ultra,
    /// 5 ppm.
    High,
    /// 20 ppm.
    Medium,
    /// 100 ppm.
    Low,
    /// An explicit ppm value.
    Ppm(f64),
}

impl SimplifyLevel {
    /// Returns the level as parts per million.
    pub fn ppm(self) -> f64 {
        match self {
            SimplifyLevel::Full => 0.0,
            SimplifyLevel::Ultra => 1.0,
            SimplifyLevel::High => 5.0,
            SimplifyLevel::Medium => 20.0,
            SimplifyLevel::Low => 100.0,
            SimplifyLevel::Ppm(ppm) => ppm,
        }
    }

    /// Returns the distortion threshold for shapes with the given bounds.
    pub fn distortion_threshold(self, bbox: &Aabb2<f64>) -> f64 {
        self.ppm() * bbox.area() / 1e6
    }
}

/// Options shared by every shape of a render run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Edge length of the canvas the larger shape dimension is scaled to.
    pub canvas_size: f64,
    /// Rings with at most this fraction of the total area are dropped.
    pub area_threshold_fraction: f64,
    /// Simplification strength.
    pub simplify: SimplifyLevel,
    /// Cap on simplification passes.
    pub max_iterations: usize,
    /// Minimum vertex reduction per pass to keep simplifying.
    pub min_size_delta: usize,
    /// SVG fill colour.
    pub fill: String,
    /// Shape kind, used for the CSS class.
    pub kind: ShapeKind,
    /// Worker threads for batch rendering. `None` uses the global pool.
    pub parallelism: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            area_threshold_fraction: DEFAULT_AREA_THRESHOLD_FRACTION,
            simplify: SimplifyLevel::Full,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_size_delta: DEFAULT_MIN_SIZE_DELTA,
            fill: "#000".to_string(),
            kind: ShapeKind::Country,
            parallelism: None,
        }
    }
}

/// One shape to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeJob {
    /// Display name, also used for the CSS class.
    pub name: String,
    /// Flat `(longitude, latitude)` buffer holding every ring.
    pub points: Vec<Point2<f64>>,
    /// Start offset of each ring in `points`.
    pub part_offsets: Vec<usize>,
}

impl ShapeJob {
    /// Creates a job.
    pub fn new(
        name: impl Into<String>,
        points: Vec<Point2<f64>>,
        part_offsets: Vec<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            points,
            part_offsets,
        }
    }
}

/// A successfully rendered shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedShape {
    /// Name of the job.
    pub name: String,
    /// Final polygons in canvas coordinates.
    pub polygons: Vec<Polygon<f64>>,
    /// The SVG drawing.
    pub svg: SvgDocument,
    /// Vertex count of the input buffer.
    pub input_vertices: usize,
    /// Vertex count across the emitted polygons.
    pub output_vertices: usize,
}

/// Renders one shape.
///
/// # Errors
///
/// * [`RenderError::Map`] for empty or non-finite input, or bad part offsets
/// * [`RenderError::NothingToRender`] if no ring survives
pub fn render_shape<P: Projection + ?Sized>(
    job: &ShapeJob,
    options: &RenderOptions,
    projection: &P,
) -> Result<RenderedShape, RenderError> {
    ensure_finite(&job.points)?;
    if job.points.is_empty() {
        return Err(MapError::EmptyGeometry.into());
    }

    let mut points = job.points.clone();
    projection.project_in_place(&mut points);
    ensure_finite(&points)?;
    mirror_y(&mut points);

    let polygons = split_and_filter(&points, &job.part_offsets, options.area_threshold_fraction)?;
    let Some(bbox) = polygons
        .iter()
        .map(Polygon::bounding_box)
        .reduce(Aabb2::union)
    else {
        return Err(RenderError::NothingToRender);
    };

    let polygons: Vec<Polygon<f64>> = polygons
        .into_iter()
        .map(|poly| {
            let mut vertices = poly.into_vertices();
            normalize_to_canvas(&mut vertices, &bbox, options.canvas_size);
            Polygon::from_vertices_unchecked(vertices)
        })
        .collect();

    let canvas = polygons
        .iter()
        .map(Polygon::bounding_box)
        .reduce(Aabb2::union)
        .unwrap_or(bbox);

    let threshold = options.simplify.distortion_threshold(&canvas);
    let polygons: Vec<Polygon<f64>> = if threshold > 0.0 {
        let config = SimplifyConfig::new(threshold)
            .with_max_iterations(options.max_iterations)
            .with_min_size_delta(options.min_size_delta);
        polygons
            .iter()
            .map(|poly| simplify_with(poly, &config).polygon)
            .filter(|poly| poly.area() > 0.0)
            .collect()
    } else {
        polygons
    };

    if polygons.is_empty() {
        return Err(RenderError::NothingToRender);
    }

    let class = class_slug(options.kind.as_str(), &job.name);
    let mut svg = SvgDocument::new(canvas.width(), canvas.height());
    for poly in &polygons {
        svg.add_polygon(poly, &options.fill, &class);
    }

    let output_vertices = polygons.iter().map(Polygon::len).sum();
    tracing::debug!(
        name = %job.name,
        polygons = polygons.len(),
        input_vertices = job.points.len(),
        output_vertices,
        "rendered shape"
    );

    Ok(RenderedShape {
        name: job.name.clone(),
        polygons,
        svg,
        input_vertices: job.points.len(),
        output_vertices,
    })
}
