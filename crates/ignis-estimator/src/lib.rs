//! Monte Carlo burn-probability estimation.
//!
//! [`MonteCarloEstimator`] runs many independent replications of a
//! [`FireSpread`](ignis_spread::FireSpread) model: each replication
//! resets a private clone of the base field, ignites, runs to burn-out
//! or budget, and contributes a per-cell burn indicator sample. Samples
//! fold into [`BurnStats`] (streaming Welford mean and population
//! variance) in strict replication order, so the report for a given
//! seed is bit-identical whether it was computed serially or on any
//! number of workers.
//!
//! Replication RNGs derive from `seed ^ replication`, making every
//! replication independently reproducible. [`CancelToken`] stops a run
//! at the next replication boundary and yields a partial report.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cancel;
pub mod config;
pub mod error;
pub mod estimator;
pub mod metrics;
pub mod stats;

pub use cancel::CancelToken;
pub use config::{EstimatorConfig, WorkerCount};
pub use error::EstimatorError;
pub use estimator::MonteCarloEstimator;
pub use metrics::{BurnReport, RunMetrics};
pub use stats::BurnStats;
