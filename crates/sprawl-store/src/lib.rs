//! Cell ownership storage for Sprawl.
//!
//! [`OwnershipStore`] records, for every lattice cell, which region(s)
//! currently claim it and at what distance from their seeds. It keeps two
//! complete cell buffers and alternates them between "current" (readable,
//! authoritative) and "next" (staged by a growth step):
//!
//! 1. [`OwnershipStore::begin_step()`] seeds the next buffer from the
//!    current one and returns a [`StepGuard`]
//! 2. the growth strategy reads the frozen current buffer and writes next
//! 3. [`StepGuard::publish()`] swaps the buffers and bumps the generation
//!
//! Seeds bypass the double buffer: [`OwnershipStore::plant_seed()`] writes
//! the current generation immediately.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod read;
pub mod store;

pub use cell::CellState;
pub use read::Snapshot;
pub use store::{OwnershipStore, PlantOutcome, StepBuffers, StepGuard};
