//! Error type for planting seeds.

use crate::id::RegionId;
use thiserror::Error;

/// Errors arising when a seed is planted into the ownership store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed coordinate lies outside the lattice.
    #[error("seed at ({x}, {y}) is outside the {side}x{side} lattice")]
    OutOfBoundsSeed {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Cells per lattice axis.
        side: u32,
    },
    /// The cell is already claimed and the overplant policy rejects it.
    #[error("cell ({x}, {y}) is already claimed")]
    CellAlreadyClaimed {
        /// Column of the claimed cell.
        x: i32,
        /// Row of the claimed cell.
        y: i32,
    },
    /// The cell is the origin of another region's seed.
    #[error("cell ({x}, {y}) is the seed of region {existing}")]
    SeedCollision {
        /// Column of the seed cell.
        x: i32,
        /// Row of the seed cell.
        y: i32,
        /// The region already seeded there.
        existing: RegionId,
    },
}
