//! Run bookkeeping and the final report.

use crate::stats::BurnStats;
use std::time::Duration;

/// Bookkeeping for one estimation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Replications requested by the configuration.
    pub requested: u64,
    /// Replications completed and folded into the statistics.
    pub completed: u64,
    /// Worker threads used (1 for serial runs).
    pub workers: usize,
    /// Ticks committed across all folded replications.
    pub total_ticks: u64,
    /// Wall-clock duration of the run.
    pub wall_time: Duration,
    /// True when a cancellation request cut the run short.
    pub cancelled: bool,
}

/// Final product of an estimation run.
#[derive(Clone, Debug, PartialEq)]
pub struct BurnReport {
    /// Per-cell burn statistics over the folded replications.
    pub stats: BurnStats,
    /// Run bookkeeping.
    pub metrics: RunMetrics,
}
