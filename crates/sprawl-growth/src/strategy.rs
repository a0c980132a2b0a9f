//! The [`GrowthStrategy`] trait and per-step [`StepReport`].

use sprawl_core::{CellCoord, RegionId};
use sprawl_space::Lattice;
use sprawl_store::OwnershipStore;

use crate::front::FrontTrackingGrowth;
use crate::nearest::NearestSeedGrowth;

/// Summary of one growth step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Store generation after the step was published.
    pub generation: u64,
    /// Cells that went from unvisited to visited.
    pub newly_visited: usize,
    /// Cells whose distance or owner set changed (includes `newly_visited`).
    pub changed: usize,
    /// Tie cells after the step.
    pub tie_cells: usize,
    /// Visited cells after the step.
    pub visited: usize,
}

impl StepReport {
    /// Whether the step changed nothing.
    ///
    /// A converged grid stays converged: further steps are no-ops until a
    /// new seed is planted.
    pub fn converged(&self) -> bool {
        self.changed == 0
    }
}

/// A per-tick growth operator.
///
/// # Contract
///
/// - `step()` advances ownership by exactly one lattice hop, computing
///   every cell of the next generation from the current generation only,
///   and publishes it through the store's double buffer.
/// - `step()` is deterministic: the same store and strategy state produce
///   the same next generation.
/// - `on_seed()` is called after a seed has been planted in the store so
///   that stateful strategies can track it.
///
/// # Object safety
///
/// The simulation stores its strategy as `Box<dyn GrowthStrategy>`.
pub trait GrowthStrategy: Send + 'static {
    /// Human-readable name for logging and metrics.
    fn name(&self) -> &str;

    /// Notification that `region` was planted at `coord`.
    ///
    /// Default: nothing to track.
    fn on_seed(&mut self, lattice: &Lattice, coord: CellCoord, region: RegionId) {
        let _ = (lattice, coord, region);
    }

    /// Execute one growth layer and publish it.
    fn step(&mut self, store: &mut OwnershipStore) -> StepReport;

    /// Forget any internal state. Called when the store is reset.
    fn reset(&mut self) {}
}

/// Selects a built-in [`GrowthStrategy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrowthStrategyKind {
    /// [`NearestSeedGrowth`] in row-major scan order.
    #[default]
    NearestSeed,
    /// [`FrontTrackingGrowth`].
    FrontTracking,
}

impl GrowthStrategyKind {
    /// Instantiate the strategy.
    pub fn build(self) -> Box<dyn GrowthStrategy> {
        match self {
            Self::NearestSeed => Box::new(NearestSeedGrowth::new()),
            Self::FrontTracking => Box::new(FrontTrackingGrowth::new()),
        }
    }
}
