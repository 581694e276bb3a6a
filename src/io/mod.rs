//! Output formats for rendered shapes.

mod svg;

pub use svg::{
    class_slug, parse_fill_map, polygon_points_attr, polygon_to_svg_path, polyline_to_svg_path,
    SvgDocument, SvgPolygon,
};
