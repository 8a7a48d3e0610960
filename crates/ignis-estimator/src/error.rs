//! Error type for estimation runs.

use ignis_spread::SpreadError;
use std::error::Error;
use std::fmt;

/// Errors from configuring or running a Monte Carlo estimation.
#[derive(Clone, Debug, PartialEq)]
pub enum EstimatorError {
    /// The configuration requested zero replications.
    ZeroReplications,
    /// A worker thread panicked or its channel closed early.
    WorkerFailure {
        /// What the collector observed.
        reason: String,
    },
    /// A replication's spread run failed.
    Spread(SpreadError),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroReplications => write!(f, "replications must be at least 1"),
            Self::WorkerFailure { reason } => write!(f, "worker failure: {reason}"),
            Self::Spread(err) => write!(f, "replication failed: {err}"),
        }
    }
}

impl Error for EstimatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spread(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpreadError> for EstimatorError {
    fn from(err: SpreadError) -> Self {
        Self::Spread(err)
    }
}
