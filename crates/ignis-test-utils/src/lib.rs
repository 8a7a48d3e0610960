//! Shared fixtures and observers for Ignis development.
//!
//! Provides canned fields (uniform fuel, sloped terrain, steady wind),
//! a stock spread model, and a [`CountingObserver`] that records what a
//! run did tick by tick.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use ignis_core::{CellState, Coord, TickId};
use ignis_field::{Field, FieldBuilder};
use ignis_space::{EdgeRule, Neighborhood};
use ignis_spread::{FireParams, FireSpread, TickObserver};
use smallvec::smallvec;

/// Shorthand for a 2D coordinate.
pub fn c(x: i32, y: i32) -> Coord {
    smallvec![x, y]
}

/// A flat, windless, all-fuel field.
pub fn uniform_field(rows: u32, cols: u32) -> Field {
    FieldBuilder::new([rows, cols])
        .build()
        .expect("uniform fixture dims are valid")
}

/// A field whose height climbs by `rise` per row along axis 0.
pub fn sloped_field(rows: u32, cols: u32, rise: f64) -> Field {
    let heights = (0..rows)
        .flat_map(|r| (0..cols).map(move |_| f64::from(r) * rise))
        .collect();
    FieldBuilder::new([rows, cols])
        .heights(heights)
        .build()
        .expect("sloped fixture dims are valid")
}

/// An all-fuel field with a steady wind blowing along positive axis 1.
pub fn windy_field(rows: u32, cols: u32, speed: f64) -> Field {
    FieldBuilder::new([rows, cols])
        .wind(speed, vec![0.0, 1.0])
        .build()
        .expect("windy fixture dims are valid")
}

/// The stock 2D model: Moore radius-1 neighborhood, ignore-missing
/// edges, default calibration, a single origin.
pub fn stock_model(origin: Coord, max_ticks: u64) -> FireSpread {
    let hood = Neighborhood::moore(1, 2, EdgeRule::IgnoreMissing)
        .expect("stock neighborhood is valid");
    FireSpread::new(hood, FireParams::default())
        .with_origins(vec![origin])
        .with_max_ticks(max_ticks)
}

/// Observer that records the burning-cell count after every tick.
#[derive(Debug, Default)]
pub struct CountingObserver {
    /// `(tick, burning cells)` per committed tick, in order.
    pub events: Vec<(TickId, usize)>,
}

impl CountingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks observed.
    pub fn ticks(&self) -> u64 {
        self.events.len() as u64
    }
}

impl TickObserver for CountingObserver {
    fn on_tick(&mut self, tick: TickId, field: &Field) {
        let burning = field
            .states()
            .iter()
            .filter(|&&s| s == CellState::Burning)
            .count();
        self.events.push((tick, burning));
    }
}
