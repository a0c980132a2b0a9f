//! Engine error types.

use sprawl_core::SeedError;
use sprawl_space::SpaceError;
use thiserror::Error;

/// Hue allocation failures from the [`SeedRegistry`](crate::SeedRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Every hue in the domain belongs to an active region.
    #[error("all {domain} hues are in use")]
    HueDomainExhausted {
        /// Size of the hue domain.
        domain: u16,
    },
    /// An explicitly requested hue is already taken.
    #[error("hue {hue} is already in use")]
    HueInUse {
        /// The requested hue.
        hue: u16,
    },
    /// An explicitly requested hue is outside `0..domain`.
    #[error("hue {hue} is outside the domain 0..{domain}")]
    HueOutOfDomain {
        /// The requested hue.
        hue: u16,
        /// Size of the hue domain.
        domain: u16,
    },
}

/// Errors detected by [`SimulationConfig::validate()`](crate::SimulationConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid size does not produce a usable lattice.
    #[error("lattice: {0}")]
    Lattice(#[from] SpaceError),
    /// The lattice has more cells than a `u32` can count.
    #[error("cell count {value} exceeds u32::MAX")]
    CellCountOverflow {
        /// Cells the lattice would hold.
        value: u64,
    },
    /// The hue domain is empty.
    #[error("hue_domain must be at least 1")]
    EmptyHueDomain,
    /// `max_regions` is zero or larger than the hue domain.
    #[error("max_regions must be between 1 and hue_domain ({hue_domain}), got {max_regions}")]
    InvalidRegionLimit {
        /// Configured region limit.
        max_regions: usize,
        /// Configured hue domain.
        hue_domain: u16,
    },
    /// `step_every` is zero.
    #[error("step_every must be at least 1")]
    ZeroStepInterval,
    /// Front-tracking growth cannot correct claims, so it cannot be
    /// combined with [`OverplantPolicy::Overwrite`](crate::OverplantPolicy::Overwrite).
    #[error("overplant policy Overwrite requires a correcting growth strategy")]
    OverwriteWithoutCorrection,
    /// The render surface has no pixels.
    #[error("surface must be at least 1x1 pixels, got {width}x{height}")]
    EmptySurface {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
}

/// Errors from user actions on a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The seed could not be placed.
    #[error(transparent)]
    Seed(#[from] SeedError),
    /// No hue could be allocated.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The configured number of regions is already active.
    #[error("region limit of {max} reached")]
    RegionLimit {
        /// Configured `max_regions`.
        max: usize,
    },
}
