//! End-to-end sessions through the public engine API.

use sprawl_core::{CellCoord, RegionId};
use sprawl_engine::{
    CellRounding, ConfigError, DrawCommand, OverplantPolicy, RecordingSurface, Simulation, SimulationConfig,
    SimulationError,
};
use sprawl_growth::GrowthStrategyKind;
use sprawl_test_utils::manhattan_labelling;

fn config(size: u32) -> SimulationConfig {
    SimulationConfig::builder()
        .grid_size(size)
        .step_every(3)
        .surface(size * 10 + 10, size * 10 + 10)
        .rounding(CellRounding::Floor)
        .build()
        .unwrap()
}

fn run_until_converged(sim: &mut Simulation<RecordingSurface>) -> usize {
    sim.start();
    for frame in 1..10_000 {
        if sim.frame() && sim.last_metrics().converged() {
            return frame;
        }
    }
    panic!("no convergence");
}

#[test]
fn fixed_hue_session_matches_labelling() {
    let mut sim = Simulation::new(config(8), RecordingSurface::new()).unwrap();
    let seeds = [((1, 1), 30), ((7, 2), 150), ((3, 8), 270)];
    for ((x, y), hue) in seeds {
        sim.plant_with_hue(CellCoord::new(x, y), hue).unwrap();
    }
    run_until_converged(&mut sim);

    let expected = manhattan_labelling(
        sim.lattice(),
        &seeds.map(|((x, y), h)| (CellCoord::new(x, y), RegionId(h))),
    );
    assert_eq!(sim.store().cells(), &expected[..]);
    assert!(sim.snapshot().is_fully_visited());
}

#[test]
fn steps_land_on_every_third_frame() {
    let mut sim = Simulation::new(config(4), RecordingSurface::new()).unwrap();
    sim.plant(CellCoord::new(0, 0)).unwrap();
    sim.start();
    let stepped: Vec<usize> = (1..=9).filter(|_| sim.frame()).collect();
    assert_eq!(stepped, vec![3, 6, 9]);
    assert_eq!(sim.store().generation(), 3);
}

#[test]
fn same_rng_seed_same_session() {
    let session = || {
        let mut sim = Simulation::new(config(6), RecordingSurface::new()).unwrap();
        for (px, py) in [(5.0, 5.0), (65.0, 15.0), (35.0, 65.0)] {
            sim.click(px, py).unwrap();
        }
        run_until_converged(&mut sim);
        sim.into_surface().take()
    };
    assert_eq!(session(), session());
}

#[test]
fn full_cover_draws_the_surface_border() {
    let mut sim = Simulation::new(config(4), RecordingSurface::new()).unwrap();
    sim.click(0.0, 0.0).unwrap();
    run_until_converged(&mut sim);

    let fills: Vec<_> = sim
        .surface()
        .last_frame()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillPolygon { points, .. } => Some(points.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 1);
    let corners: Vec<(f64, f64)> = fills[0].iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(corners, vec![(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 50.0)]);
}

#[test]
fn late_seeds_follow_the_overplant_policy() {
    for (policy, expect_ok) in [
        (OverplantPolicy::Reject, false),
        (OverplantPolicy::Overwrite, true),
    ] {
        let config = SimulationConfig {
            overplant: policy,
            ..config(6)
        };
        let mut sim = Simulation::new(config, RecordingSurface::new()).unwrap();
        sim.plant(CellCoord::new(0, 0)).unwrap();
        run_until_converged(&mut sim);
        let late = sim.plant(CellCoord::new(6, 6));
        assert_eq!(late.is_ok(), expect_ok, "{policy:?}");
        if let Err(err) = late {
            assert!(matches!(err, SimulationError::Seed(_)));
        }
    }
}

#[test]
fn front_tracking_keeps_grown_regions_whole() {
    let overwrite = SimulationConfig {
        strategy: GrowthStrategyKind::FrontTracking,
        overplant: OverplantPolicy::Overwrite,
        ..config(6)
    };
    assert_eq!(
        Simulation::new(overwrite, RecordingSurface::new()).err(),
        Some(ConfigError::OverwriteWithoutCorrection)
    );

    let config = SimulationConfig {
        strategy: GrowthStrategyKind::FrontTracking,
        ..config(6)
    };
    let mut sim = Simulation::new(config, RecordingSurface::new()).unwrap();
    let outer = sim.plant(CellCoord::new(0, 0)).unwrap();
    for _ in 0..20 {
        sim.step();
    }
    let inner = sim.plant(CellCoord::new(3, 3));
    assert!(matches!(inner, Err(SimulationError::Seed(_))));
    for _ in 0..20 {
        sim.step();
    }
    let contours = sim.contours();
    assert!(contours.is_complete());
    assert!(contours.polygon(outer).is_some());
}

#[test]
fn non_finite_clicks_are_rejected() {
    let mut sim = Simulation::new(config(6), RecordingSurface::new()).unwrap();
    for (px, py) in [(f64::NAN, 5.0), (5.0, f64::NAN), (f64::INFINITY, 5.0)] {
        assert!(matches!(sim.click(px, py), Err(SimulationError::Seed(_))));
    }
    assert!(sim.registry().is_empty());
}

#[test]
fn strategies_agree_when_seeds_precede_growth() {
    let cells = |kind| {
        let config = SimulationConfig {
            strategy: kind,
            ..config(9)
        };
        let mut sim = Simulation::new(config, RecordingSurface::new()).unwrap();
        for (x, y, hue) in [(0, 0, 10), (9, 0, 20), (4, 5, 30), (9, 9, 40)] {
            sim.plant_with_hue(CellCoord::new(x, y), hue).unwrap();
        }
        run_until_converged(&mut sim);
        sim.store().cells().to_vec()
    };
    assert_eq!(
        cells(GrowthStrategyKind::NearestSeed),
        cells(GrowthStrategyKind::FrontTracking)
    );
}
