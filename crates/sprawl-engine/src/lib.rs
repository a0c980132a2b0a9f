//! Simulation engine for Sprawl.
//!
//! Ties the growth and contour crates into an interactive simulation:
//!
//! - [`SimulationConfig`]: validated configuration with a fluent builder
//! - [`SeedRegistry`]: collision-free hue allocation per region
//! - [`Simulation`]: the context owning store, registry, strategy,
//!   scheduler, and render surface
//! - [`FrameScheduler`]: one growth step every N frames
//! - [`PointerMapper`]: pointer pixels to lattice cells
//! - [`RenderSurface`] and [`Frame`]: drawing glue
//! - [`StepMetrics`]: per-step timing and progress

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod registry;
pub mod render;
pub mod scheduler;
pub mod simulation;

pub use config::{OverplantPolicy, SimulationConfig, SimulationConfigBuilder};
pub use error::{ConfigError, RegistryError, SimulationError};
pub use input::{CellRounding, PointerMapper};
pub use metrics::StepMetrics;
pub use registry::{Seed, SeedRegistry};
pub use render::{Color, DrawCommand, Frame, Point, RecordingSurface, RenderSurface, FILL_ALPHA};
pub use scheduler::FrameScheduler;
pub use simulation::Simulation;
