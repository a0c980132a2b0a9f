//! Boundary extraction for Sprawl regions.
//!
//! [`trace()`] turns the cells a region owns in a
//! [`Snapshot`](sprawl_store::Snapshot) into a closed [`Polygon`] on the
//! corner lattice, walking clockwise with the owned area on the right.
//! [`trace_all()`] does the same for many regions and collects failures
//! instead of stopping at the first one.
//!
//! A single outline cannot describe a region that is split in pieces or
//! encloses unowned cells, so both are checked up front and reported as
//! [`ContourError`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod mask;
pub mod polygon;
pub mod tracer;

pub use error::ContourError;
pub use mask::RegionMask;
pub use polygon::Polygon;
pub use tracer::{trace, trace_all, ContourSet};
