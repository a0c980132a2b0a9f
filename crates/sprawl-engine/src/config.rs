//! Simulation configuration and validation.
//!
//! [`SimulationConfig`] is plain data with sensible defaults. Build one
//! with struct update syntax or [`SimulationConfig::builder()`], then hand
//! it to [`Simulation::new()`](crate::Simulation::new), which calls
//! [`validate()`](SimulationConfig::validate) first.

use sprawl_growth::GrowthStrategyKind;
use sprawl_space::Lattice;

use crate::error::ConfigError;
use crate::input::CellRounding;

// ── OverplantPolicy ────────────────────────────────────────────────

/// What happens when a seed is planted on a cell growth already claimed.
///
/// Seed origins are never overwritten under either policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverplantPolicy {
    /// Refuse with [`SeedError::CellAlreadyClaimed`](sprawl_core::SeedError::CellAlreadyClaimed).
    #[default]
    Reject,
    /// Replace the claim; nearest-seed growth then corrects nearby cells.
    /// Requires [`GrowthStrategyKind::NearestSeed`].
    Overwrite,
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Interior grid lines; the lattice has `grid_size + 1` cells per axis.
    /// Default: 10.
    pub grid_size: u32,
    /// Hues are drawn from `0..hue_domain`. Default: 360.
    pub hue_domain: u16,
    /// Maximum number of regions. Default: 360.
    pub max_regions: usize,
    /// Seed for the hue generator. Default: 0.
    pub rng_seed: u64,
    /// Frames between growth steps. Default: 10.
    pub step_every: u32,
    /// Stop growing after this many steps. Default: none.
    pub step_cap: Option<u64>,
    /// Growth strategy. Default: nearest-seed labelling.
    pub strategy: GrowthStrategyKind,
    /// Planting on claimed cells. Default: reject.
    pub overplant: OverplantPolicy,
    /// Surface width in pixels. Default: 600.
    pub surface_width: u32,
    /// Surface height in pixels. Default: 600.
    pub surface_height: u32,
    /// Pointer-to-cell rounding. Default: nearest even.
    pub rounding: CellRounding,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            hue_domain: 360,
            max_regions: 360,
            rng_seed: 0,
            step_every: 10,
            step_cap: None,
            strategy: GrowthStrategyKind::default(),
            overplant: OverplantPolicy::default(),
            surface_width: 600,
            surface_height: 600,
            rounding: CellRounding::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder {
            config: Self::default(),
        }
    }

    /// The lattice for `grid_size`.
    pub fn lattice(&self) -> Result<Lattice, ConfigError> {
        Ok(Lattice::new(self.grid_size)?)
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. The grid must produce a lattice.
        let lattice = self.lattice()?;
        // 1a. Cell count must fit in u32.
        let side = u64::from(lattice.side());
        let cell_count = side.saturating_mul(side);
        if u32::try_from(cell_count).is_err() {
            return Err(ConfigError::CellCountOverflow { value: cell_count });
        }
        // 2. At least one hue.
        if self.hue_domain == 0 {
            return Err(ConfigError::EmptyHueDomain);
        }
        // 3. Every region needs its own hue.
        if self.max_regions == 0 || self.max_regions > usize::from(self.hue_domain) {
            return Err(ConfigError::InvalidRegionLimit {
                max_regions: self.max_regions,
                hue_domain: self.hue_domain,
            });
        }
        // 4. The scheduler divides by step_every.
        if self.step_every == 0 {
            return Err(ConfigError::ZeroStepInterval);
        }
        // 5. Front tracking cannot correct an overwritten claim.
        if self.strategy == GrowthStrategyKind::FrontTracking
            && self.overplant == OverplantPolicy::Overwrite
        {
            return Err(ConfigError::OverwriteWithoutCorrection);
        }
        // 6. Pointer mapping divides by the surface size.
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(ConfigError::EmptySurface {
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        Ok(())
    }
}

// ── Builder ────────────────────────────────────────────────────────

/// Fluent builder for [`SimulationConfig`].
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Set the grid size.
    pub fn grid_size(mut self, size: u32) -> Self {
        self.config.grid_size = size;
        self
    }

    /// Set the hue domain. Also lowers `max_regions` to fit if needed.
    pub fn hue_domain(mut self, domain: u16) -> Self {
        self.config.hue_domain = domain;
        self.config.max_regions = self.config.max_regions.min(usize::from(domain));
        self
    }

    /// Set the region limit.
    pub fn max_regions(mut self, max: usize) -> Self {
        self.config.max_regions = max;
        self
    }

    /// Set the hue generator seed.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = seed;
        self
    }

    /// Step growth every `frames` frames.
    pub fn step_every(mut self, frames: u32) -> Self {
        self.config.step_every = frames;
        self
    }

    /// Stop growing after `steps` steps.
    pub fn step_cap(mut self, steps: u64) -> Self {
        self.config.step_cap = Some(steps);
        self
    }

    /// Select the growth strategy.
    pub fn strategy(mut self, kind: GrowthStrategyKind) -> Self {
        self.config.strategy = kind;
        self
    }

    /// Select the overplant policy.
    pub fn overplant(mut self, policy: OverplantPolicy) -> Self {
        self.config.overplant = policy;
        self
    }

    /// Set the surface size in pixels.
    pub fn surface(mut self, width: u32, height: u32) -> Self {
        self.config.surface_width = width;
        self.config.surface_height = height;
        self
    }

    /// Select pointer rounding.
    pub fn rounding(mut self, rounding: CellRounding) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
