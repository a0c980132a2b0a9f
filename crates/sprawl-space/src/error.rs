//! Error types for lattice construction and coordinate checks.

use sprawl_core::CellCoord;
use thiserror::Error;

/// Errors arising from lattice construction or coordinate lookups.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Attempted to construct a lattice with zero cells.
    #[error("lattice must have at least one cell")]
    EmptyLattice,
    /// A dimension exceeds what `i32` coordinates can address.
    #[error("{name} {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension was too large.
        name: &'static str,
        /// The rejected value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
    /// A coordinate is outside the lattice.
    #[error("cell {coord} out of bounds: [0, {side}) x [0, {side})")]
    CellOutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Cells per axis.
        side: u32,
    },
}
