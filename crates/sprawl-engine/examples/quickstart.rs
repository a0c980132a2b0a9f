//! Sprawl Quickstart: three seeds grown to a full partition, headless.
//!
//! Demonstrates:
//!   1. Building a SimulationConfig
//!   2. Clicking seeds onto the surface
//!   3. Driving frames until growth converges
//!   4. Reading the outlines that were drawn
//!
//! Run with:
//!   RUST_LOG=info cargo run --example quickstart

use sprawl_engine::{DrawCommand, RecordingSurface, Simulation, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SimulationConfig::builder()
        .grid_size(10)
        .rng_seed(7)
        .step_every(2)
        .surface(440, 440)
        .build()?;
    let mut sim = Simulation::new(config, RecordingSurface::new())?;

    for (px, py) in [(40.0, 40.0), (400.0, 120.0), (200.0, 400.0)] {
        let region = sim.click(px, py)?;
        let origin = sim.registry().get(region).map(|s| s.origin);
        println!("seeded hue {region} at {origin:?}");
    }

    sim.start();
    let mut frames = 0;
    loop {
        frames += 1;
        if sim.frame() && sim.last_metrics().converged() {
            break;
        }
    }

    let metrics = sim.last_metrics();
    println!(
        "converged after {} frames, generation {}: {} cells, {} ties",
        frames, metrics.generation, metrics.visited_total, metrics.tie_cells
    );

    for (region, polygon) in &sim.contours().polygons {
        println!(
            "  hue {region:>3}: {} vertices, area {}",
            polygon.len(),
            polygon.signed_area()
        );
    }

    let fills = sim
        .surface()
        .last_frame()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillPolygon { .. }))
        .count();
    println!("last frame filled {fills} polygons");
    Ok(())
}
