//! Error types for landscape construction and access.

use ignis_core::Coord;
use std::fmt;

/// Errors arising from field construction or cell access.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A field needs at least one axis.
    ZeroRank,
    /// A grid axis has zero cells.
    EmptyAxis {
        /// Index of the offending axis.
        axis: usize,
    },
    /// A grid axis exceeds the `i32` coordinate range.
    AxisTooLarge {
        /// Index of the offending axis.
        axis: usize,
        /// The rejected axis length.
        value: u32,
        /// Largest accepted length.
        max: u32,
    },
    /// The product of the axis lengths overflows `usize`.
    CellCountOverflow,
    /// A per-cell layer does not match the grid's cell count.
    LayerLength {
        /// Which layer was rejected.
        layer: &'static str,
        /// Cells the grid has.
        expected: usize,
        /// Values the layer supplied.
        got: usize,
    },
    /// The wind direction vector does not match the grid rank.
    WindRank {
        /// Axes the grid has.
        expected: usize,
        /// Components the vector supplied.
        got: usize,
    },
    /// A layer or parameter contains a NaN or infinite value.
    NonFinite {
        /// Which layer or parameter was rejected.
        what: &'static str,
    },
    /// Cell size must be a positive finite number.
    NonPositiveCellSize {
        /// The rejected size.
        value: f64,
    },
    /// A vegetation class name is not in the table.
    UnknownVegClass {
        /// The name that was looked up.
        name: String,
    },
    /// A coordinate has the wrong number of axes for this field.
    RankMismatch {
        /// Axes the field has.
        expected: usize,
        /// Axes the coordinate supplied.
        got: usize,
    },
    /// A coordinate is outside the bounds of the field.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRank => write!(f, "field needs at least one axis"),
            Self::EmptyAxis { axis } => write!(f, "grid axis {axis} has zero cells"),
            Self::AxisTooLarge { axis, value, max } => {
                write!(f, "grid axis {axis} length {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow => write!(f, "grid cell count overflows usize"),
            Self::LayerLength {
                layer,
                expected,
                got,
            } => {
                write!(f, "layer '{layer}' has {got} values, grid has {expected} cells")
            }
            Self::WindRank { expected, got } => {
                write!(f, "wind direction has {got} components, grid has {expected} axes")
            }
            Self::NonFinite { what } => write!(f, "'{what}' contains a non-finite value"),
            Self::NonPositiveCellSize { value } => {
                write!(f, "cell size must be positive and finite, got {value}")
            }
            Self::UnknownVegClass { name } => {
                write!(f, "unknown vegetation class '{name}'")
            }
            Self::RankMismatch { expected, got } => {
                write!(f, "expected {expected} axes, got {got}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for FieldError {}
