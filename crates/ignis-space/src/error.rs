//! Error types for neighborhood construction and queries.

use ignis_core::Coord;
use std::fmt;

/// Errors arising from neighborhood construction or spatial queries.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Neighborhood radius must be at least 1.
    ZeroRadius,
    /// Radius exceeds the `i32` coordinate range.
    RadiusTooLarge {
        /// The rejected radius.
        value: u32,
        /// Largest accepted radius.
        max: u32,
    },
    /// Neighborhoods need at least one dimension.
    ZeroRank,
    /// Hexagonal neighborhoods are only defined on 2D lattices.
    HexRankUnsupported {
        /// The requested dimensionality.
        ndim: usize,
    },
    /// Radial slack must be a finite number.
    NonFiniteSlack {
        /// The rejected slack value.
        value: f64,
    },
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
    /// A coordinate or grid has the wrong number of axes for this
    /// neighborhood.
    RankMismatch {
        /// Rank the neighborhood was built for.
        expected: usize,
        /// Rank of the value supplied.
        got: usize,
    },
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Offset-position lookup is undefined for row-parity tables.
    OffsetLookupUnsupported,
    /// The queried offset is not part of this neighborhood.
    OffsetNotFound {
        /// The offset that was looked up.
        offset: Coord,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRadius => write!(f, "neighborhood radius must be at least 1"),
            Self::RadiusTooLarge { value, max } => {
                write!(f, "radius {value} exceeds maximum {max}")
            }
            Self::ZeroRank => write!(f, "neighborhood needs at least one dimension"),
            Self::HexRankUnsupported { ndim } => {
                write!(f, "hexagonal neighborhoods are 2D only, got {ndim}D")
            }
            Self::NonFiniteSlack { value } => {
                write!(f, "radial slack must be finite, got {value}")
            }
            Self::EmptyAxis { axis } => write!(f, "grid axis {axis} has zero cells"),
            Self::AxisTooLarge { axis, value, max } => {
                write!(f, "grid axis {axis} length {value} exceeds maximum {max}")
            }
            Self::RankMismatch { expected, got } => {
                write!(f, "expected {expected} axes, got {got}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::OffsetLookupUnsupported => {
                write!(f, "offset position lookup is undefined for row-parity tables")
            }
            Self::OffsetNotFound { offset } => {
                write!(f, "offset {offset:?} is not part of this neighborhood")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
