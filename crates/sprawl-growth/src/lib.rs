//! Region growth for Sprawl.
//!
//! A [`GrowthStrategy`] advances ownership by exactly one lattice hop per
//! call to [`step()`](GrowthStrategy::step), reading only the frozen
//! current generation of the [`OwnershipStore`](sprawl_store::OwnershipStore)
//! and publishing the next one atomically.
//!
//! # Strategies
//!
//! - [`NearestSeedGrowth`]: cell labelling. Every cell relaxes against its
//!   four neighbours each tick; late seeds correct existing claims.
//! - [`FrontTrackingGrowth`]: per-cell open-side masks and an explicit
//!   frontier that falls through open sides. First claim wins.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod front;
pub mod frontier;
pub mod nearest;
pub mod strategy;

pub use front::{FrontTrackingGrowth, SideMask};
pub use frontier::Frontier;
pub use nearest::{NearestSeedGrowth, NearestSeedGrowthBuilder, ScanOrder};
pub use strategy::{GrowthStrategy, GrowthStrategyKind, StepReport};
