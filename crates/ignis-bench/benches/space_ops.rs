//! Criterion micro-benchmarks for neighborhood resolution.

use criterion::{criterion_group, criterion_main, Criterion};
use ignis_space::{EdgeRule, Neighborhood};
use smallvec::smallvec;
use std::hint::black_box;

/// Benchmark: resolve neighbors for all 10K cells of a 100x100 grid
/// with a Moore radius-1 neighborhood.
fn bench_neighbors_moore_10k(c: &mut Criterion) {
    let hood = Neighborhood::moore(1, 2, EdgeRule::IgnoreMissing).unwrap();
    let dims = [100u32, 100];

    c.bench_function("neighbors_moore_10k", |b| {
        b.iter(|| {
            for x in 0..100i32 {
                for y in 0..100i32 {
                    let coord = smallvec![x, y];
                    let n = hood.neighbors(&coord, &dims);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: same sweep with a von Neumann radius-2 neighborhood,
/// which carries a larger offset table.
fn bench_neighbors_von_neumann_r2_10k(c: &mut Criterion) {
    let hood = Neighborhood::von_neumann(2, 2, EdgeRule::IgnoreMissing).unwrap();
    let dims = [100u32, 100];

    c.bench_function("neighbors_von_neumann_r2_10k", |b| {
        b.iter(|| {
            for x in 0..100i32 {
                for y in 0..100i32 {
                    let coord = smallvec![x, y];
                    let n = hood.neighbors(&coord, &dims);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: same sweep on a wrapped torus, where every axis resolves
/// through the modulo path.
fn bench_neighbors_wrap_10k(c: &mut Criterion) {
    let hood = Neighborhood::moore(1, 2, EdgeRule::Wrap).unwrap();
    let dims = [100u32, 100];

    c.bench_function("neighbors_wrap_10k", |b| {
        b.iter(|| {
            for x in 0..100i32 {
                for y in 0..100i32 {
                    let coord = smallvec![x, y];
                    let n = hood.neighbors(&coord, &dims);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: hexagonal sweep, exercising the row-parity table split.
fn bench_neighbors_hex_10k(c: &mut Criterion) {
    let hood = Neighborhood::hexagonal(1, 2, EdgeRule::IgnoreMissing).unwrap();
    let dims = [100u32, 100];

    c.bench_function("neighbors_hex_10k", |b| {
        b.iter(|| {
            for x in 0..100i32 {
                for y in 0..100i32 {
                    let coord = smallvec![x, y];
                    let n = hood.neighbors(&coord, &dims);
                    black_box(&n);
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_neighbors_moore_10k,
    bench_neighbors_von_neumann_r2_10k,
    bench_neighbors_wrap_10k,
    bench_neighbors_hex_10k
);
criterion_main!(benches);
