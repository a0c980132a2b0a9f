//! Core types for the Sprawl region-growth engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: region and tick
//! identifiers, cell and corner coordinates, the tie-aware [`RegionSet`],
//! and the seed-planting error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod region_set;

pub use coord::{CellCoord, Corner};
pub use error::SeedError;
pub use id::{RegionId, TickId};
pub use region_set::RegionSet;
