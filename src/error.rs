//! Error types for mapshape operations.

use thiserror::Error;

/// Errors raised on malformed geometric input.
///
/// Numeric edge cases such as zero area are not errors; they surface as
/// empty or minimal results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// An operation that needs at least one point received none.
    #[error("empty geometry: at least one point is required")]
    EmptyGeometry,

    /// A polygon has fewer than three vertices.
    #[error("degenerate polygon: {len} vertices, at least 3 required")]
    DegeneratePolygon {
        /// Number of vertices supplied.
        len: usize,
    },

    /// Part offsets are not strictly increasing or point past the buffer.
    #[error("invalid part offset {offset} for a buffer of {len} points")]
    InvalidPartOffsets {
        /// The offending offset.
        offset: usize,
        /// Length of the flat point buffer.
        len: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at point {index}")]
    NonFiniteCoordinate {
        /// Index of the offending point in the input buffer.
        index: usize,
    },
}
