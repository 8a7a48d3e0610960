//! Core types for the Ignis wildfire simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate: cell coordinates, tick
//! and replication identifiers, and the fire state of a landscape cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod state;

pub use error::CoreError;
pub use id::{Coord, ReplicationId, TickId};
pub use state::CellState;
