//! Criterion benchmarks for the Monte Carlo estimator.

use criterion::{criterion_group, criterion_main, Criterion};
use ignis_bench::{reference_field, reference_model};
use ignis_estimator::{EstimatorConfig, MonteCarloEstimator, WorkerCount};
use smallvec::smallvec;
use std::hint::black_box;

fn config(workers: WorkerCount) -> EstimatorConfig {
    EstimatorConfig {
        replications: 8,
        seed: 42,
        workers,
    }
}

/// Benchmark: 8 replications folded on the caller thread.
fn bench_estimate_serial(c: &mut Criterion) {
    let model = reference_model(smallvec![50, 50]);
    let field = reference_field(42);
    let estimator = MonteCarloEstimator::new(config(WorkerCount::Fixed(1)));

    c.bench_function("estimate_serial_8", |b| {
        b.iter(|| {
            let report = estimator.run_serial(&model, &field).unwrap();
            black_box(&report);
        });
    });
}

/// Benchmark: the same 8 replications through a 4-worker pool, to track
/// the pool's spawn and fold overhead against the serial baseline.
fn bench_estimate_pool(c: &mut Criterion) {
    let model = reference_model(smallvec![50, 50]);
    let field = reference_field(42);
    let estimator = MonteCarloEstimator::new(config(WorkerCount::Fixed(4)));

    c.bench_function("estimate_pool_8x4", |b| {
        b.iter(|| {
            let report = estimator.run(&model, &field).unwrap();
            black_box(&report);
        });
    });
}

criterion_group!(benches, bench_estimate_serial, bench_estimate_pool);
criterion_main!(benches);
