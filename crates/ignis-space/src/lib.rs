//! Neighborhood geometry for Ignis landscapes.
//!
//! This crate defines [`Neighborhood`], the spatial abstraction through
//! which the fire spread model discovers which cells can ignite which,
//! along with the supported [`Topology`] shapes and boundary [`EdgeRule`]s.
//!
//! # Topologies
//!
//! - [`Topology::Moore`]: Chebyshev ball (all cells within `radius` steps,
//!   diagonals included)
//! - [`Topology::VonNeumann`]: Manhattan ball (no diagonals at radius 1)
//! - [`Topology::Radial`]: Euclidean ball with a slack term
//! - [`Topology::Hexagonal`]: 2D hex adjacency on a rectangular lattice,
//!   with row-parity-dependent offsets
//!
//! Offset tables are generated once at construction and resolved against
//! a concrete cell and grid extent by [`Neighborhood::neighbors`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod neighborhood;
pub mod topology;

pub use edge::EdgeRule;
pub use error::SpaceError;
pub use neighborhood::Neighborhood;
pub use topology::Topology;
