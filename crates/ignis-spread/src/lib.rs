//! Stochastic fire spread over an Ignis landscape.
//!
//! The model follows the cellular-automaton formulation of
//! Alexandridis et al. (2008): each tick, every fuel cell with burning
//! neighbors draws once against an ignition probability assembled from
//! a base burn rate, the neighbor's vegetation factors, a wind term and
//! a slope term. Burning cells burn out after one tick. All updates are
//! synchronous; reads see the pre-tick snapshot and writes land in the
//! staging buffer committed at tick end.
//!
//! [`FireSpread`] owns the neighborhood geometry, the calibrated
//! [`FireParams`] and the ignition origins; [`FireSpread::run`] drives
//! a single fire to completion and [`FireSpread::step`] advances one
//! tick for incremental use. [`TickObserver`] hooks into committed
//! ticks for tracing and tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod observer;
pub mod params;

pub use error::SpreadError;
pub use model::{FireSpread, RunOutcome, Termination};
pub use observer::TickObserver;
pub use params::FireParams;
