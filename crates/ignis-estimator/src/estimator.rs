//! Replication workers and the strictly-ordered fold.

use crate::cancel::CancelToken;
use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::metrics::{BurnReport, RunMetrics};
use crate::stats::BurnStats;
use crossbeam_channel::{Receiver, Sender};
use ignis_core::ReplicationId;
use ignis_field::Field;
use ignis_spread::{FireSpread, SpreadError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::thread;
use std::time::Instant;

/// Runs independent fire replications and folds their burn indicators.
///
/// Each replication resets a private clone of the base field, seeds a
/// fresh RNG from `seed ^ replication`, runs the model to completion
/// and contributes the field's burn indicators as one sample. Samples
/// fold into [`BurnStats`] in strict replication order through a
/// reorder buffer, so the report for a given configuration is
/// bit-identical for any worker count.
///
/// # Examples
///
/// ```
/// use ignis_estimator::{EstimatorConfig, MonteCarloEstimator, WorkerCount};
/// use ignis_field::FieldBuilder;
/// use ignis_space::{EdgeRule, Neighborhood};
/// use ignis_spread::{FireParams, FireSpread};
/// use smallvec::smallvec;
///
/// let hood = Neighborhood::moore(1, 2, EdgeRule::IgnoreMissing).unwrap();
/// let model = FireSpread::new(hood, FireParams::default())
///     .with_origins(vec![smallvec![3, 3]])
///     .with_max_ticks(100);
/// let field = FieldBuilder::new([7, 7]).build().unwrap();
///
/// let estimator = MonteCarloEstimator::new(EstimatorConfig {
///     replications: 50,
///     seed: 7,
///     workers: WorkerCount::Fixed(2),
/// });
/// let report = estimator.run(&model, &field).unwrap();
/// assert_eq!(report.metrics.completed, 50);
/// assert_eq!(report.stats.mean()[24], 1.0); // the origin burns every time
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEstimator {
    config: EstimatorConfig,
    cancel: CancelToken,
}

impl MonteCarloEstimator {
    /// Build an estimator with a fresh cancellation token.
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Use an externally shared cancellation token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// The run configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// A clone of the cancellation token, for handing to other threads.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Estimate over a worker pool.
    ///
    /// Workers draw replication indices from a shared task channel and
    /// send results back over a reply channel; the reply channel is the
    /// only synchronization point. Cancellation is honored at
    /// replication boundaries and yields a partial report whose folded
    /// samples are the prefix `0..completed`.
    pub fn run(&self, model: &FireSpread, base: &Field) -> Result<BurnReport, EstimatorError> {
        self.config.validate()?;
        let start = Instant::now();
        let requested = self.config.replications;
        let workers = self.config.workers.resolved();
        let abort = CancelToken::new();

        let (task_tx, task_rx) = crossbeam_channel::unbounded();
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
        for rep in 0..requested {
            let _ = task_tx.send(rep);
        }
        drop(task_tx);

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let model = model.clone();
            let field = base.clone();
            let tasks = task_rx.clone();
            let replies = reply_tx.clone();
            let cancel = self.cancel.clone();
            let abort = abort.clone();
            let seed = self.config.seed;
            handles.push(thread::spawn(move || {
                replication_worker(model, field, seed, tasks, replies, cancel, abort);
            }));
        }
        drop(task_rx);
        drop(reply_tx);

        let mut stats = BurnStats::new(base.cell_count());
        let mut pending: HashMap<u64, ReplicationResult> = HashMap::new();
        let mut next = 0u64;
        let mut total_ticks = 0u64;
        let mut failure: Option<EstimatorError> = None;

        while next < requested {
            match reply_rx.recv() {
                Ok(Ok(result)) => {
                    pending.insert(result.rep.0, result);
                    while let Some(ready) = pending.remove(&next) {
                        stats.push(&ready.indicators);
                        total_ticks += ready.ticks;
                        next += 1;
                    }
                }
                Ok(Err(err)) => {
                    abort.cancel();
                    failure = Some(EstimatorError::Spread(err));
                    break;
                }
                Err(_) => break,
            }
        }
        drop(reply_rx);

        for handle in handles {
            if handle.join().is_err() && failure.is_none() {
                failure = Some(EstimatorError::WorkerFailure {
                    reason: "worker thread panicked".to_string(),
                });
            }
        }
        if let Some(err) = failure {
            return Err(err);
        }
        let cancelled = self.cancel.is_cancelled() && next < requested;
        if next < requested && !cancelled {
            return Err(EstimatorError::WorkerFailure {
                reason: format!("reply channel closed after {next} of {requested} replications"),
            });
        }

        Ok(BurnReport {
            stats,
            metrics: RunMetrics {
                requested,
                completed: next,
                workers,
                total_ticks,
                wall_time: start.elapsed(),
                cancelled,
            },
        })
    }

    /// Estimate on the caller thread.
    ///
    /// The fold is identical to [`run`](MonteCarloEstimator::run), so
    /// both produce the same statistics for the same configuration.
    pub fn run_serial(
        &self,
        model: &FireSpread,
        base: &Field,
    ) -> Result<BurnReport, EstimatorError> {
        self.config.validate()?;
        let start = Instant::now();
        let requested = self.config.replications;
        let mut field = base.clone();
        let mut stats = BurnStats::new(base.cell_count());
        let mut total_ticks = 0u64;
        let mut completed = 0u64;

        for rep in 0..requested {
            if self.cancel.is_cancelled() {
                break;
            }
            let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed ^ rep);
            field.reset();
            let outcome = model.run(&mut field, &mut rng)?;
            stats.push(&field.burn_indicators());
            total_ticks += outcome.ticks;
            completed += 1;
        }

        Ok(BurnReport {
            stats,
            metrics: RunMetrics {
                requested,
                completed,
                workers: 1,
                total_ticks,
                wall_time: start.elapsed(),
                cancelled: completed < requested,
            },
        })
    }
}

/// One replication's contribution, keyed for the ordered fold.
struct ReplicationResult {
    rep: ReplicationId,
    ticks: u64,
    indicators: Vec<f64>,
}

/// Main loop for a replication worker thread.
///
/// Runs until the task channel drains, a cancellation or abort flag is
/// raised, or the collector hangs up. Each iteration: reset the private
/// field, seed the replication RNG, run the model, reply.
fn replication_worker(
    model: FireSpread,
    mut field: Field,
    seed: u64,
    tasks: Receiver<u64>,
    replies: Sender<Result<ReplicationResult, SpreadError>>,
    cancel: CancelToken,
    abort: CancelToken,
) {
    while let Ok(rep) = tasks.recv() {
        if cancel.is_cancelled() || abort.is_cancelled() {
            break;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ rep);
        field.reset();
        match model.run(&mut field, &mut rng) {
            Ok(outcome) => {
                let result = ReplicationResult {
                    rep: ReplicationId(rep),
                    ticks: outcome.ticks,
                    indicators: field.burn_indicators(),
                };
                if replies.send(Ok(result)).is_err() {
                    break;
                }
            }
            Err(err) => {
                let _ = replies.send(Err(err));
                break;
            }
        }
    }
}
