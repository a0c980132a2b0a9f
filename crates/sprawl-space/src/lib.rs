//! Lattice topology for Sprawl.
//!
//! [`Lattice`] is the fixed-size, corner-indexed square grid every other
//! subsystem works on: it owns the dimensions, converts between cell
//! coordinates and flat indices, and answers 4-connected neighbour
//! queries. Neighbours outside the lattice are absent, never an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod lattice;

#[cfg(test)]
pub(crate) mod compliance;

pub use direction::Direction;
pub use error::SpaceError;
pub use lattice::Lattice;
