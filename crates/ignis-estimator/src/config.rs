//! Estimation run configuration.

use crate::error::EstimatorError;

/// Worker pool sizing for [`MonteCarloEstimator::run`](crate::MonteCarloEstimator::run).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerCount {
    /// Auto-detect: `available_parallelism / 2`, clamped to `[2, 16]`.
    Auto,
    /// Explicit thread count, clamped to `[1, 64]`. Zero workers would
    /// make a run that can never finish, so it clamps up to 1.
    Fixed(usize),
}

impl WorkerCount {
    /// Resolve to an actual thread count.
    pub fn resolved(self) -> usize {
        match self {
            Self::Fixed(n) => n.clamp(1, 64),
            Self::Auto => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self::Auto
    }
}

/// Configuration for one Monte Carlo estimation run.
#[derive(Clone, Debug)]
pub struct EstimatorConfig {
    /// Number of independent replications. Default: 100.
    pub replications: u64,
    /// Base seed. Replication `r` seeds its RNG from `seed ^ r`, so the
    /// full run is reproducible and each replication is independently
    /// re-runnable. Default: 0.
    pub seed: u64,
    /// Worker pool sizing. Ignored by serial runs. Default: auto.
    pub workers: WorkerCount,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            replications: 100,
            seed: 0,
            workers: WorkerCount::Auto,
        }
    }
}

impl EstimatorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.replications == 0 {
            return Err(EstimatorError::ZeroReplications);
        }
        Ok(())
    }
}
