//! Benchmark profiles and utilities for the Ignis wildfire simulator.
//!
//! Provides pre-built deterministic landscapes for benchmarking:
//!
//! - [`reference_field`]: 100x100 grid (10K cells) with mixed terrain
//! - [`stress_field`]: 316x316 grid (~100K cells) with the same terrain
//! - [`reference_model`]: Moore-1 spread model with the stock calibration

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ignis_core::Coord;
use ignis_field::{Field, FieldBuilder, VegClasses};
use ignis_space::{EdgeRule, Neighborhood};
use ignis_spread::{FireParams, FireSpread};

/// Build a reference benchmark landscape: 100x100 grid (10K cells).
///
/// Terrain rises half a meter per row with per-cell noise on top, and
/// the stock vegetation classes are scattered by a hash of `seed`.
/// Wind blows along the diagonal at 3 m/s.
pub fn reference_field(seed: u64) -> Field {
    terrain_field(100, 100, seed)
}

/// Build a stress benchmark landscape: 316x316 grid (~100K cells).
///
/// Same terrain recipe as [`reference_field`] at 10x the cell count.
pub fn stress_field(seed: u64) -> Field {
    terrain_field(316, 316, seed)
}

/// Build the stock spread model used by the run benchmarks.
///
/// Moore radius-1 neighborhood, boundary cells keeping their in-bounds
/// neighbors, default calibration, one ignition at `origin`.
pub fn reference_model(origin: Coord) -> FireSpread {
    let hood = Neighborhood::moore(1, 2, EdgeRule::IgnoreMissing).unwrap();
    FireSpread::new(hood, FireParams::default())
        .with_origins(vec![origin])
        .with_max_ticks(1_000)
}

fn terrain_field(rows: u32, cols: u32, seed: u64) -> Field {
    let classes = VegClasses::standard();
    let type_factors = [
        classes.type_factor("agricultural").unwrap(),
        classes.type_factor("thickets").unwrap(),
        classes.type_factor("aleppo-pine").unwrap(),
    ];
    let density_factors = [
        classes.density_factor("sparse").unwrap(),
        classes.density_factor("normal").unwrap(),
        classes.density_factor("dense").unwrap(),
    ];

    let cells = (rows as usize) * (cols as usize);
    let mut heights = Vec::with_capacity(cells);
    let mut veg_type = Vec::with_capacity(cells);
    let mut veg_density = Vec::with_capacity(cells);
    for idx in 0..cells {
        let u = unit(seed, idx as u64);
        let row = idx / cols as usize;
        heights.push(0.5 * row as f64 + 3.0 * u);
        veg_type.push(type_factors[bucket(u)]);
        veg_density.push(density_factors[bucket(unit(seed ^ 1, idx as u64))]);
    }

    FieldBuilder::new([rows, cols])
        .heights(heights)
        .veg_type(veg_type)
        .veg_density(veg_density)
        .wind(3.0, vec![0.6, 0.8])
        .build()
        .unwrap()
}

/// Deterministic unit-interval sample for cell `idx`.
fn unit(seed: u64, idx: u64) -> f64 {
    let x = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(idx.wrapping_mul(1442695040888963407));
    (x >> 11) as f64 / (1u64 << 53) as f64
}

/// Map a unit sample to one of three class buckets.
fn bucket(u: f64) -> usize {
    ((u * 3.0) as usize).min(2)
}
