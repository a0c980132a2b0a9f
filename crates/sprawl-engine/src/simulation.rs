//! The simulation context.
//!
//! [`Simulation`] owns every moving part: the ownership store, the seed
//! registry, the growth strategy, the frame scheduler, the pointer mapper,
//! and the render surface. All mutators take `&mut self`, so seeding,
//! stepping, and rendering are strictly sequenced.
//!
//! # Frame loop
//!
//! A host calls [`click()`](Simulation::click) for pointer input and
//! [`frame()`](Simulation::frame) once per animation frame. `frame()`
//! asks the scheduler whether growth is due, steps if so, then redraws.

use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};
use sprawl_contour::{trace_all, ContourSet};
use sprawl_core::{CellCoord, RegionId, SeedError};
use sprawl_growth::GrowthStrategy;
use sprawl_space::Lattice;
use sprawl_store::{OwnershipStore, PlantOutcome, Snapshot};

use crate::config::{OverplantPolicy, SimulationConfig};
use crate::error::{ConfigError, SimulationError};
use crate::input::PointerMapper;
use crate::metrics::{elapsed_us, StepMetrics};
use crate::registry::SeedRegistry;
use crate::render::{Frame, RenderSurface};
use crate::scheduler::FrameScheduler;

// ── Simulation ──────────────────────────────────────────────────

/// An interactive region-growth simulation drawing onto `R`.
///
/// # Examples
///
/// ```
/// use sprawl_engine::{RecordingSurface, Simulation, SimulationConfig};
/// use sprawl_core::CellCoord;
///
/// let config = SimulationConfig::builder().grid_size(4).step_every(1).build().unwrap();
/// let mut sim = Simulation::new(config, RecordingSurface::new()).unwrap();
/// let region = sim.plant(CellCoord::new(2, 2)).unwrap();
/// sim.start();
/// sim.frame();
/// assert_eq!(sim.store().region_cell_count(region), 5);
/// ```
pub struct Simulation<R: RenderSurface> {
    config: SimulationConfig,
    store: OwnershipStore,
    registry: SeedRegistry,
    growth: Box<dyn GrowthStrategy>,
    scheduler: FrameScheduler,
    pointer: PointerMapper,
    surface: R,
    last_metrics: StepMetrics,
}

impl<R: RenderSurface> Simulation<R> {
    /// Validate `config` and build an empty, paused simulation.
    pub fn new(config: SimulationConfig, surface: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = config.lattice()?;
        let growth = config.strategy.build();
        info!(
            "simulation created: {}x{} lattice, {}, step every {} frames",
            lattice.side(),
            lattice.side(),
            growth.name(),
            config.step_every
        );
        Ok(Self {
            pointer: PointerMapper::new(
                lattice.side(),
                config.surface_width,
                config.surface_height,
                config.rounding,
            ),
            store: OwnershipStore::new(lattice),
            registry: SeedRegistry::new(config.hue_domain, config.rng_seed),
            growth,
            scheduler: FrameScheduler::new(config.step_every, config.step_cap),
            surface,
            last_metrics: StepMetrics::default(),
            config,
        })
    }

    // ── Seeding ─────────────────────────────────────────────────

    /// Plant a seed at `coord` with a freshly drawn hue.
    ///
    /// # Errors
    ///
    /// - [`SeedError::OutOfBoundsSeed`] if `coord` is off the lattice
    /// - [`SeedError::SeedCollision`] if `coord` is already a seed
    /// - [`SeedError::CellAlreadyClaimed`] if growth claimed `coord` and
    ///   the overplant policy is [`OverplantPolicy::Reject`]
    /// - [`SimulationError::RegionLimit`] at `max_regions`
    /// - [`RegistryError::HueDomainExhausted`](crate::RegistryError::HueDomainExhausted)
    ///   if no hue is free
    ///
    /// Nothing changes on error.
    pub fn plant(&mut self, coord: CellCoord) -> Result<RegionId, SimulationError> {
        self.check_plantable(coord)?;
        let region = self.registry.create_seed(coord, self.store.tick())?;
        self.commit_seed(coord, region)
    }

    /// Plant a seed at `coord` with an explicit hue.
    ///
    /// # Errors
    ///
    /// As [`plant()`](Self::plant), plus
    /// [`RegistryError::HueInUse`](crate::RegistryError::HueInUse) and
    /// [`RegistryError::HueOutOfDomain`](crate::RegistryError::HueOutOfDomain).
    pub fn plant_with_hue(
        &mut self,
        coord: CellCoord,
        hue: u16,
    ) -> Result<RegionId, SimulationError> {
        self.check_plantable(coord)?;
        let region = self
            .registry
            .register_with_hue(coord, hue, self.store.tick())?;
        self.commit_seed(coord, region)
    }

    /// Map a pointer click to a cell, plant there, and redraw.
    ///
    /// A rejected click is logged and leaves the simulation unchanged; the
    /// surface is redrawn either way.
    pub fn click(&mut self, px: f64, py: f64) -> Result<RegionId, SimulationError> {
        let coord = self.pointer.map(px, py);
        let result = self.plant(coord);
        if let Err(err) = &result {
            warn!("click at ({px}, {py}) -> {coord} rejected: {err}");
        }
        self.render();
        result
    }

    /// Bounds, collision, overplant, and region-limit checks, in that
    /// order, before any hue is allocated.
    fn check_plantable(&self, coord: CellCoord) -> Result<(), SimulationError> {
        let lattice = self.store.lattice();
        let Some(cell) = self.store.cell(coord) else {
            return Err(SeedError::OutOfBoundsSeed {
                x: coord.x,
                y: coord.y,
                side: lattice.side(),
            }
            .into());
        };
        if let (true, Some(&existing)) = (cell.is_seed(), cell.regions().iter().next()) {
            return Err(SeedError::SeedCollision {
                x: coord.x,
                y: coord.y,
                existing,
            }
            .into());
        }
        if cell.is_visited() && self.config.overplant == OverplantPolicy::Reject {
            return Err(SeedError::CellAlreadyClaimed {
                x: coord.x,
                y: coord.y,
            }
            .into());
        }
        if self.registry.len() >= self.config.max_regions {
            return Err(SimulationError::RegionLimit {
                max: self.config.max_regions,
            });
        }
        Ok(())
    }

    fn commit_seed(
        &mut self,
        coord: CellCoord,
        region: RegionId,
    ) -> Result<RegionId, SimulationError> {
        let outcome = self.store.plant_seed(coord, region)?;
        if let PlantOutcome::Overwrote { previous } = &outcome {
            debug!("region {region} overplanted {coord}, previously {previous:?}");
        }
        self.growth.on_seed(self.store.lattice(), coord, region);
        Ok(region)
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Run one growth step now, regardless of the scheduler.
    pub fn step(&mut self) -> &StepMetrics {
        let start = Instant::now();
        let report = self.growth.step(&mut self.store);
        self.last_metrics = StepMetrics {
            total_us: elapsed_us(start.elapsed()),
            newly_visited: report.newly_visited,
            changed: report.changed,
            tie_cells: report.tie_cells,
            visited_total: report.visited,
            generation: report.generation,
        };
        &self.last_metrics
    }

    /// Advance one animation frame: step if the scheduler says so, then
    /// redraw. Returns whether growth stepped.
    pub fn frame(&mut self) -> bool {
        let stepped = self.scheduler.on_frame();
        if stepped {
            self.step();
            if self.scheduler.is_capped() {
                info!("step cap reached after {} steps", self.scheduler.steps());
            }
        }
        self.render();
        stepped
    }

    /// Start (or resume) growth.
    pub fn start(&mut self) {
        if !self.scheduler.is_running() {
            info!("simulation started with {} regions", self.registry.len());
        }
        self.scheduler.start();
    }

    /// Pause growth. Frames still render.
    pub fn pause(&mut self) {
        if self.scheduler.is_running() {
            info!("simulation paused at generation {}", self.store.generation());
        }
        self.scheduler.pause();
    }

    /// Clear every region and cell and pause.
    pub fn reset(&mut self) {
        self.store.reset();
        self.registry.clear();
        self.growth.reset();
        self.scheduler.reset();
        self.last_metrics = StepMetrics::default();
        info!("simulation reset");
    }

    // ── Rendering ───────────────────────────────────────────────

    /// Outlines of every region in creation order.
    pub fn contours(&self) -> ContourSet {
        trace_all(&self.store.snapshot(), self.registry.regions())
    }

    /// Redraw the surface from the current generation.
    pub fn render(&mut self) {
        let contours = self.contours();
        let frame = Frame::compose(
            self.store.lattice(),
            &contours,
            self.config.surface_width,
            self.config.surface_height,
        );
        frame.draw(&mut self.surface);
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The validated configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Lattice topology.
    pub fn lattice(&self) -> &Lattice {
        self.store.lattice()
    }

    /// The ownership store.
    pub fn store(&self) -> &OwnershipStore {
        &self.store
    }

    /// Read-only view of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.store.snapshot()
    }

    /// Active regions.
    pub fn registry(&self) -> &SeedRegistry {
        &self.registry
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Pointer-to-cell mapping.
    pub fn pointer(&self) -> &PointerMapper {
        &self.pointer
    }

    /// Name of the growth strategy in use.
    pub fn strategy_name(&self) -> &str {
        self.growth.name()
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The render surface.
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Consume the simulation and return the surface.
    pub fn into_surface(self) -> R {
        self.surface
    }
}

impl<R: RenderSurface> fmt::Debug for Simulation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("side", &self.store.lattice().side())
            .field("strategy", &self.growth.name())
            .field("regions", &self.registry.len())
            .field("generation", &self.store.generation())
            .field("running", &self.scheduler.is_running())
            .finish()
    }
}
