//! Contour tracing errors.

use sprawl_core::RegionId;
use thiserror::Error;

/// Why a region could not be traced as one closed polygon.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContourError {
    /// The region owns no cells in this snapshot.
    #[error("region {region} owns no cells")]
    EmptyRegion {
        /// The region.
        region: RegionId,
    },
    /// The owned cells form more than one edge-connected piece.
    #[error("region {region} is split into {components} disconnected pieces")]
    Disconnected {
        /// The region.
        region: RegionId,
        /// Number of edge-connected pieces.
        components: usize,
    },
    /// The owned cells enclose unowned cells.
    #[error("region {region} encloses {holes} hole(s)")]
    Holed {
        /// The region.
        region: RegionId,
        /// Number of enclosed unowned pieces.
        holes: usize,
    },
    /// The boundary walk did not return to its start within the lattice
    /// edge count.
    #[error("contour walk for region {region} did not close within {limit} steps")]
    WalkDiverged {
        /// The region.
        region: RegionId,
        /// Step bound that was exceeded.
        limit: usize,
    },
}

impl ContourError {
    /// The region that failed.
    pub fn region(&self) -> RegionId {
        match *self {
            Self::EmptyRegion { region }
            | Self::Disconnected { region, .. }
            | Self::Holed { region, .. }
            | Self::WalkDiverged { region, .. } => region,
        }
    }
}
