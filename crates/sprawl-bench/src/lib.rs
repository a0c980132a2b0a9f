//! Benchmark profiles and utilities for Sprawl.
//!
//! - [`reference_profile`]: 100x100 lattice stepping every frame
//! - [`stress_profile`]: 316x316 lattice (~100K cells)
//! - [`init_seed_positions`]: deterministic seed placement
//! - [`grown_store`]: a store grown to convergence

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;

use sprawl_core::{CellCoord, RegionId};
use sprawl_engine::SimulationConfig;
use sprawl_growth::GrowthStrategyKind;
use sprawl_space::Lattice;
use sprawl_store::OwnershipStore;

/// 100x100 cells, one step per frame.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        grid_size: 99,
        rng_seed: seed,
        step_every: 1,
        surface_width: 1000,
        surface_height: 1000,
        ..SimulationConfig::default()
    }
}

/// 316x316 cells, one step per frame.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        grid_size: 315,
        ..reference_profile(seed)
    }
}

/// Deterministic, collision-free seed positions.
///
/// Places `n` seeds with a simple hash of `seed`, probing forward on
/// collision. Region ids are `0..n`, so `n` must not exceed the cell
/// count or 360.
pub fn init_seed_positions(lattice: &Lattice, n: u16, seed: u64) -> Vec<(CellCoord, RegionId)> {
    let cell_count = lattice.cell_count();
    let mut positions = Vec::with_capacity(usize::from(n));
    let mut occupied = HashSet::new();

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(u64::from(i).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;
        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        positions.push((lattice.coord(pos), RegionId(i)));
    }
    positions
}

/// A store with `seeds` planted and grown by `kind` until a step
/// changes nothing.
pub fn grown_store(
    lattice: &Lattice,
    seeds: &[(CellCoord, RegionId)],
    kind: GrowthStrategyKind,
) -> OwnershipStore {
    let mut store = OwnershipStore::new(lattice.clone());
    let mut growth = kind.build();
    for &(coord, region) in seeds {
        if store.plant_seed(coord, region).is_ok() {
            growth.on_seed(lattice, coord, region);
        }
    }
    while !growth.step(&mut store).converged() {}
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        reference_profile(42).validate().unwrap();
        stress_profile(42).validate().unwrap();
        assert_eq!(stress_profile(1).lattice().unwrap().cell_count(), 316 * 316);
    }

    #[test]
    fn seed_positions_no_collisions() {
        let lattice = Lattice::with_side(10).unwrap();
        let seeds = init_seed_positions(&lattice, 10, 42);
        let unique: HashSet<CellCoord> = seeds.iter().map(|&(c, _)| c).collect();
        assert_eq!(unique.len(), 10);
        assert!(seeds.iter().all(|&(c, _)| lattice.contains(c)));
    }

    #[test]
    fn seed_positions_deterministic() {
        let lattice = Lattice::with_side(30).unwrap();
        assert_eq!(
            init_seed_positions(&lattice, 5, 42),
            init_seed_positions(&lattice, 5, 42)
        );
    }

    #[test]
    fn grown_store_is_fully_visited() {
        let lattice = Lattice::with_side(20).unwrap();
        let seeds = init_seed_positions(&lattice, 4, 7);
        let store = grown_store(&lattice, &seeds, GrowthStrategyKind::NearestSeed);
        assert!(store.is_fully_visited());
    }
}
