//! Landscape grid and terrain layers for Ignis simulations.
//!
//! The central type is [`Field`]: per-cell fire states stored flat in
//! row-major order, double-buffered so a transition rule can read the
//! pre-tick snapshot while writing the next tick, plus the static
//! terrain layers (height, vegetation type and density), wind, and the
//! cell size. [`FieldBuilder`] validates every layer at construction.
//!
//! [`VegClasses`] maps named vegetation classes to the factors the
//! spread model plugs into its ignition formula.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod veg;

pub use error::FieldError;
pub use field::{Field, FieldBuilder, TickView};
pub use veg::VegClasses;
