//! Sprawl: seeds planted on a grid grow tick by tick into a partition of
//! Manhattan-nearest regions, drawn as filled outlines.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sprawl sub-crates. For most users, adding `sprawl` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sprawl::prelude::*;
//!
//! let config = SimulationConfig::builder()
//!     .grid_size(4)
//!     .step_every(1)
//!     .build()
//!     .unwrap();
//! let mut sim = Simulation::new(config, RecordingSurface::new()).unwrap();
//!
//! let a = sim.plant_with_hue(CellCoord::new(0, 0), 0).unwrap();
//! let b = sim.plant_with_hue(CellCoord::new(4, 4), 180).unwrap();
//! sim.start();
//! while !(sim.frame() && sim.last_metrics().converged()) {}
//!
//! // The anti-diagonal is equidistant from both seeds.
//! let tie = sim.store().cell(CellCoord::new(2, 2)).unwrap();
//! assert!(tie.owned_by(a) && tie.owned_by(b));
//!
//! let outline = trace(&sim.snapshot(), a).unwrap();
//! assert_eq!(outline.signed_area(), 15);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sprawl-core` | Ids, coordinates, region sets, seed errors |
//! | [`space`] | `sprawl-space` | Lattice topology and directions |
//! | [`store`] | `sprawl-store` | Double-buffered cell ownership |
//! | [`growth`] | `sprawl-growth` | Growth strategies |
//! | [`contour`] | `sprawl-contour` | Boundary tracing |
//! | [`engine`] | `sprawl-engine` | Simulation context, config, render glue |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and ids (`sprawl-core`).
pub use sprawl_core as types;

/// Lattice topology (`sprawl-space`).
///
/// [`space::Lattice`] maps cell coordinates to flat indices and answers
/// neighbour queries.
pub use sprawl_space as space;

/// Cell ownership storage (`sprawl-store`).
pub use sprawl_store as store;

/// Growth strategies (`sprawl-growth`).
///
/// [`growth::NearestSeedGrowth`] is the default;
/// [`growth::FrontTrackingGrowth`] is the frontier-based alternative.
pub use sprawl_growth as growth;

/// Boundary tracing (`sprawl-contour`).
pub use sprawl_contour as contour;

/// Simulation context and collaborators (`sprawl-engine`).
pub use sprawl_engine as engine;

/// Common imports for typical Sprawl usage.
///
/// ```rust
/// use sprawl::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use sprawl_core::{CellCoord, Corner, RegionId, RegionSet, SeedError, TickId};

    // Space
    pub use sprawl_space::{Direction, Lattice};

    // Store
    pub use sprawl_store::{CellState, OwnershipStore, Snapshot};

    // Growth
    pub use sprawl_growth::{GrowthStrategy, GrowthStrategyKind, StepReport};

    // Contour
    pub use sprawl_contour::{trace, trace_all, ContourError, ContourSet, Polygon};

    // Engine
    pub use sprawl_engine::{
        CellRounding, Color, OverplantPolicy, RecordingSurface, RenderSurface, Simulation,
        SimulationConfig, SimulationError, StepMetrics,
    };
}
