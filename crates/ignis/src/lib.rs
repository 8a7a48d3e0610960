//! Ignis: Monte Carlo wildfire spread simulation on cellular automata.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Ignis sub-crates. For most users, adding `ignis` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ignis::prelude::*;
//! use smallvec::smallvec;
//!
//! // A 21x21 landscape of uniform fuel on flat, windless ground.
//! let field = FieldBuilder::new([21, 21]).build().unwrap();
//!
//! // Fire starts at the center and spreads over the 8-cell Moore
//! // neighborhood with the stock calibration.
//! let hood = Neighborhood::moore(1, 2, EdgeRule::IgnoreMissing).unwrap();
//! let model = FireSpread::new(hood, FireParams::default())
//!     .with_origins(vec![smallvec![10, 10]])
//!     .with_max_ticks(500);
//!
//! // Estimate per-cell burn probability over 50 replications.
//! let estimator = MonteCarloEstimator::new(EstimatorConfig {
//!     replications: 50,
//!     seed: 42,
//!     workers: WorkerCount::Auto,
//! });
//! let report = estimator.run(&model, &field).unwrap();
//!
//! // The origin burns in every replication; the whole map stays in
//! // probability range.
//! let origin = field.index_of(&smallvec![10, 10]).unwrap();
//! assert_eq!(report.stats.mean()[origin], 1.0);
//! assert!(report.stats.mean().iter().all(|&m| (0.0..=1.0).contains(&m)));
//! assert_eq!(report.metrics.completed, 50);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ignis-core` | Coordinates, identifiers, cell states |
//! | [`space`] | `ignis-space` | Neighborhood topologies and edge rules |
//! | [`field`] | `ignis-field` | Landscape grid, terrain layers, vegetation classes |
//! | [`spread`] | `ignis-spread` | Stochastic fire spread model and run loop |
//! | [`estimator`] | `ignis-estimator` | Parallel Monte Carlo burn-probability estimation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and identifiers (`ignis-core`).
///
/// Contains [`types::Coord`], [`types::TickId`], [`types::ReplicationId`]
/// and the per-cell [`types::CellState`].
pub use ignis_core as types;

/// Neighborhood topologies and boundary rules (`ignis-space`).
///
/// Build a [`space::Neighborhood`] from a [`space::Topology`] shape
/// (Moore, von Neumann, radial, hexagonal) and an [`space::EdgeRule`],
/// then resolve neighbors against concrete grids.
pub use ignis_space as space;

/// Landscape grid and terrain layers (`ignis-field`).
///
/// [`field::Field`] holds the double-buffered fire states plus the
/// static height, vegetation and wind layers; [`field::FieldBuilder`]
/// validates them at construction. [`field::VegClasses`] names the
/// vegetation factor tables.
pub use ignis_field as field;

/// Stochastic fire spread (`ignis-spread`).
///
/// [`spread::FireSpread`] advances a landscape tick by tick under the
/// Alexandridis ignition formula; [`spread::TickObserver`] hooks into
/// committed ticks.
pub use ignis_spread as spread;

/// Monte Carlo burn-probability estimation (`ignis-estimator`).
///
/// [`estimator::MonteCarloEstimator`] runs replications serially or on
/// a worker pool and folds them into [`estimator::BurnStats`], with
/// bit-identical reports for any worker count.
pub use ignis_estimator as estimator;

/// Common imports for typical Ignis usage.
///
/// ```rust
/// use ignis::prelude::*;
/// ```
///
/// This imports the most frequently used types: the field builder, the
/// spread model, the estimator, and the identifiers and errors they
/// traffic in.
pub mod prelude {
    // Core types
    pub use ignis_core::{CellState, Coord, ReplicationId, TickId};

    // Errors
    pub use ignis_core::CoreError;
    pub use ignis_estimator::EstimatorError;
    pub use ignis_field::FieldError;
    pub use ignis_space::SpaceError;
    pub use ignis_spread::SpreadError;

    // Space
    pub use ignis_space::{EdgeRule, Neighborhood, Topology};

    // Field
    pub use ignis_field::{Field, FieldBuilder, VegClasses};

    // Spread
    pub use ignis_spread::{FireParams, FireSpread, RunOutcome, Termination, TickObserver};

    // Estimation
    pub use ignis_estimator::{
        BurnReport, BurnStats, CancelToken, EstimatorConfig, MonteCarloEstimator, RunMetrics,
        WorkerCount,
    };
}
