//! Error type for model construction and runs.

use ignis_field::FieldError;
use ignis_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors from building [`FireParams`](crate::FireParams) or running
/// a [`FireSpread`](crate::FireSpread) model.
#[derive(Clone, Debug, PartialEq)]
pub enum SpreadError {
    /// A model coefficient was NaN or infinite.
    NonFiniteParam {
        /// Which coefficient.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The base burn probability must lie in `[0, 1]`.
    ProbabilityOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// The neighborhood rank does not match the field rank.
    RankMismatch {
        /// Rank of the model's neighborhood.
        expected: usize,
        /// Rank of the field the run was given.
        got: usize,
    },
    /// A spatial query failed.
    Space(SpaceError),
    /// A field access failed.
    Field(FieldError),
}

impl fmt::Display for SpreadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteParam { name, value } => {
                write!(f, "fire parameter {name} must be finite, got {value}")
            }
            Self::ProbabilityOutOfRange { value } => {
                write!(f, "burn probability must be in [0, 1], got {value}")
            }
            Self::RankMismatch { expected, got } => {
                write!(
                    f,
                    "neighborhood rank {expected} does not match field rank {got}"
                )
            }
            Self::Space(err) => write!(f, "space error: {err}"),
            Self::Field(err) => write!(f, "field error: {err}"),
        }
    }
}

impl Error for SpreadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(err) => Some(err),
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpaceError> for SpreadError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}

impl From<FieldError> for SpreadError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}
