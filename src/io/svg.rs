//! SVG export for map shapes.
//!
//! Produces path data for single rings and complete SVG documents holding
//! one `<polygon>` element per ring, sized to the shape's bounding box.
//!
//! # Example
//!
//! ```
//! use mapshape::io::{class_slug, SvgDocument};
//! use mapshape::{Point2, Polygon};
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ])
//! .unwrap();
//!
//! let mut doc = SvgDocument::new(10.0, 10.0);
//! doc.add_polygon(&square, "#000", &class_slug("country", "Côte d'Ivoire"));
//! let svg = doc.to_svg_string();
//! assert!(svg.contains(r#"viewBox="0 0 10 10""#));
//! assert!(svg.contains("<polygon"));
//! ```

use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::{self, Write};

/// Converts a polyline to an SVG path string.
///
/// # Arguments
///
/// * `points` - The polyline points
/// * `closed` - If true, adds a `Z` command to close the path
///
/// # Example
///
/// ```
/// use mapshape::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// let svg = polyline_to_svg_path(&points, true);
/// assert_eq!(svg, "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut result = format!("M {} {}", first.x, first.y);
    for p in rest {
        let _ = write!(result, " L {} {}", p.x, p.y);
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a polygon to a closed SVG path string.
pub fn polygon_to_svg_path<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    polyline_to_svg_path(polygon.vertices(), true)
}

/// Formats polygon vertices as a `points` attribute: `x,y x,y ...`.
pub fn polygon_points_attr<F: Float + fmt::Display>(polygon: &Polygon<F>) -> String {
    let mut attr = String::new();
    for (i, p) in polygon.vertices().iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        let _ = write!(attr, "{},{}", p.x, p.y);
    }
    attr
}

/// Builds a CSS class name such as `country-united-states` for a shape.
///
/// The name is lower-cased, spaces become `-`, and `.`, `(` and `)` are
/// dropped.
pub fn class_slug(kind: &str, name: &str) -> String {
    format!("{kind}-{}", name_slug(name))
}

fn name_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | '(' | ')'))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

/// Parses `name:colour` definitions into a fill map for
/// [`SvgDocument::highlight`].
///
/// Names are slugged the same way as [`class_slug`], so `"United States:#f00"`
/// maps `united-states` to `#f00`. The split happens at the last `:`; entries
/// without one are skipped. Later definitions win.
pub fn parse_fill_map<S: AsRef<str>>(definitions: &[S]) -> HashMap<String, String> {
    let mut fills = HashMap::new();
    for definition in definitions {
        let definition = definition.as_ref();
        let Some((name, fill)) = definition.rsplit_once(':') else {
            tracing::warn!(definition, "ignoring fill definition without ':'");
            continue;
        };
        fills.insert(name_slug(name), fill.to_string());
    }
    fills
}

/// One filled polygon element of an [`SvgDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPolygon {
    /// Value of the `points` attribute.
    pub points: String,
    /// Fill colour.
    pub fill: String,
    /// CSS class.
    pub class: String,
}

/// An SVG drawing made of filled polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    polygons: Vec<SvgPolygon>,
}

impl SvgDocument {
    /// Creates an empty document with a `0 0 width height` view box.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            polygons: Vec::new(),
        }
    }

    /// Appends a polygon element.
    pub fn add_polygon<F: Float + fmt::Display>(
        &mut self,
        polygon: &Polygon<F>,
        fill: &str,
        class: &str,
    ) {
        self.polygons.push(SvgPolygon {
            points: polygon_points_attr(polygon),
            fill: escape_attr(fill),
            class: escape_attr(class),
        });
    }

    /// Returns the polygon elements in insertion order.
    pub fn polygons(&self) -> &[SvgPolygon] {
        &self.polygons
    }

    /// Returns the view box width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the view box height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Recolours polygons whose shape name appears in `fills`.
    ///
    /// The shape name is the part of the class after the first `-`, so the
    /// keys are name slugs without the kind prefix (`united-states`, not
    /// `country-united-states`). Returns the number of polygons recoloured.
    pub fn highlight(&mut self, fills: &HashMap<String, String>) -> usize {
        let fills: HashMap<String, String> = fills
            .iter()
            .map(|(name, fill)| (escape_attr(name), escape_attr(fill)))
            .collect();

        let mut recoloured = 0;
        for poly in &mut self.polygons {
            let Some((_, name)) = poly.class.split_once('-') else {
                continue;
            };
            if let Some(fill) = fills.get(name) {
                poly.fill.clone_from(fill);
                recoloured += 1;
            }
        }

        tracing::debug!(recoloured, "highlighted svg polygons");
        recoloured
    }

    /// Serializes the document.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> fmt::Result {
        writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {} {}">"#,
            self.width, self.height
        )?;
        for poly in &self.polygons {
            writeln!(
                out,
                r#"  <polygon class="{}" fill="{}" points="{}" />"#,
                poly.class, poly.fill, poly.points
            )?;
        }
        writeln!(out, "</svg>")
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
