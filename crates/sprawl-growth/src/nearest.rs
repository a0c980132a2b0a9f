//! Nearest-seed labelling growth.
//!
//! Each tick every cell relaxes against its four neighbours in the frozen
//! current generation. The cell's own state is the starting candidate; a
//! neighbour at distance `d` offers `d + 1`:
//!
//! - a strictly smaller offer replaces the cell's distance and owners
//! - an equal offer unions its owners in
//! - a larger offer is ignored
//!
//! Seeds are distance 0 and can never be beaten, so they keep their region.
//! After `k` ticks every cell within Manhattan distance `k` of a seed holds
//! its exact distance and the full set of nearest regions, which is the
//! Manhattan Voronoi labelling with ties. A seed planted after growth has
//! started corrects the cells it is nearer to.

use log::debug;
use sprawl_core::RegionSet;
use sprawl_space::{Direction, Lattice};
use sprawl_store::{CellState, OwnershipStore, StepBuffers};

use crate::strategy::{GrowthStrategy, StepReport};

/// Order in which cells are visited within one step.
///
/// Every cell reads only the current generation, so the order has no
/// effect on the result. It is configurable so that this can be checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// Row-major, top-left first.
    #[default]
    RowMajor,
    /// Row-major reversed, bottom-right first.
    Reverse,
}

/// Growth by per-cell relaxation against the current generation.
///
/// Stateless: all state lives in the [`OwnershipStore`].
#[derive(Clone, Debug, Default)]
pub struct NearestSeedGrowth {
    order: ScanOrder,
    scratch: RegionSet,
}

/// Builder for [`NearestSeedGrowth`].
#[derive(Clone, Debug, Default)]
pub struct NearestSeedGrowthBuilder {
    order: ScanOrder,
}

impl NearestSeedGrowth {
    /// Row-major labelling growth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder.
    pub fn builder() -> NearestSeedGrowthBuilder {
        NearestSeedGrowthBuilder::default()
    }

    /// Configured scan order.
    pub fn order(&self) -> ScanOrder {
        self.order
    }
}

impl NearestSeedGrowthBuilder {
    /// Set the cell scan order.
    pub fn scan_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// Build the strategy.
    pub fn build(self) -> NearestSeedGrowth {
        NearestSeedGrowth {
            order: self.order,
            scratch: RegionSet::new(),
        }
    }
}

/// Best claim on `index` given the current generation.
///
/// Leaves the winning owners in `regions` and returns the winning distance,
/// or `None` if neither the cell nor any neighbour is visited.
fn relax(
    lattice: &Lattice,
    current: &[CellState],
    index: usize,
    regions: &mut RegionSet,
) -> Option<u32> {
    let own = &current[index];
    let mut best = own.distance();
    regions.assign(own.regions());

    for direction in Direction::ALL {
        let Some(nb) = lattice.neighbour_index(index, direction) else {
            continue;
        };
        let nb_cell = &current[nb];
        let Some(nb_distance) = nb_cell.distance() else {
            continue;
        };
        let offer = nb_distance.saturating_add(1);
        match best {
            Some(d) if offer > d => {}
            Some(d) if offer == d => regions.union_with(nb_cell.regions()),
            _ => {
                best = Some(offer);
                regions.assign(nb_cell.regions());
            }
        }
    }
    best
}

impl GrowthStrategy for NearestSeedGrowth {
    fn name(&self) -> &str {
        "NearestSeedGrowth"
    }

    fn step(&mut self, store: &mut OwnershipStore) -> StepReport {
        let mut report = StepReport::default();
        let mut guard = store.begin_step();
        {
            let StepBuffers {
                lattice,
                current,
                next,
            } = guard.buffers();
            let n = current.len();
            let order: Box<dyn Iterator<Item = usize>> = match self.order {
                ScanOrder::RowMajor => Box::new(0..n),
                ScanOrder::Reverse => Box::new((0..n).rev()),
            };

            for index in order {
                let own = &current[index];
                let Some(distance) = relax(lattice, current, index, &mut self.scratch) else {
                    continue;
                };

                if !own.is_visited() {
                    report.newly_visited += 1;
                }
                if own.distance() != Some(distance) || *own.regions() != self.scratch {
                    report.changed += 1;
                    next[index].set_claim(distance, &self.scratch);
                }
                report.visited += 1;
                if self.scratch.is_tie() {
                    report.tie_cells += 1;
                }
            }
        }
        report.generation = guard.publish();

        debug!(
            "{} gen {}: +{} visited, {} changed, {} ties, {} total",
            self.name(),
            report.generation,
            report.newly_visited,
            report.changed,
            report.tie_cells,
            report.visited
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprawl_core::{CellCoord, RegionId};

    fn store(size: u32) -> OwnershipStore {
        OwnershipStore::new(Lattice::new(size).unwrap())
    }

    fn plant(s: &mut OwnershipStore, x: i32, y: i32, region: u16) {
        s.plant_seed(CellCoord::new(x, y), RegionId(region)).unwrap();
    }

    fn regions_at(s: &OwnershipStore, x: i32, y: i32) -> Vec<u16> {
        s.cell(CellCoord::new(x, y))
            .unwrap()
            .regions()
            .iter()
            .map(|r| r.0)
            .collect()
    }

    // ── Single tick ─────────────────────────────────────────────

    #[test]
    fn one_tick_claims_the_four_neighbours() {
        let mut s = store(4);
        plant(&mut s, 2, 2, 10);
        let report = NearestSeedGrowth::new().step(&mut s);

        assert_eq!(report.newly_visited, 4);
        assert_eq!(report.changed, 4);
        assert_eq!(report.visited, 5);
        assert_eq!(report.generation, 1);
        for (x, y) in [(2, 1), (3, 2), (2, 3), (1, 2)] {
            let cell = s.cell(CellCoord::new(x, y)).unwrap();
            assert_eq!(cell.distance(), Some(1));
            assert_eq!(regions_at(&s, x, y), vec![10]);
        }
        assert!(!s.is_visited(CellCoord::new(1, 1)));
    }

    #[test]
    fn seed_at_corner_claims_two_neighbours() {
        let mut s = store(4);
        plant(&mut s, 0, 0, 1);
        let report = NearestSeedGrowth::new().step(&mut s);
        assert_eq!(report.newly_visited, 2);
        assert!(s.is_visited(CellCoord::new(1, 0)));
        assert!(s.is_visited(CellCoord::new(0, 1)));
    }

    #[test]
    fn growth_moves_one_hop_per_tick() {
        let mut s = store(6);
        plant(&mut s, 0, 0, 1);
        let mut growth = NearestSeedGrowth::new();
        growth.step(&mut s);
        assert!(!s.is_visited(CellCoord::new(2, 0)));
        growth.step(&mut s);
        assert!(s.is_visited(CellCoord::new(2, 0)));
        assert!(s.is_visited(CellCoord::new(1, 1)));
        assert!(!s.is_visited(CellCoord::new(3, 0)));
    }

    #[test]
    fn empty_store_steps_to_nothing() {
        let mut s = store(3);
        let report = NearestSeedGrowth::new().step(&mut s);
        assert!(report.converged());
        assert_eq!(report.visited, 0);
        assert_eq!(s.generation(), 1);
    }

    // ── Ties ────────────────────────────────────────────────────

    #[test]
    fn equidistant_cell_is_tied() {
        let mut s = store(4);
        plant(&mut s, 0, 2, 1);
        plant(&mut s, 4, 2, 2);
        let mut growth = NearestSeedGrowth::new();
        growth.step(&mut s);
        growth.step(&mut s);
        let cell = s.cell(CellCoord::new(2, 2)).unwrap();
        assert_eq!(cell.distance(), Some(2));
        assert_eq!(regions_at(&s, 2, 2), vec![1, 2]);
        assert!(cell.is_tie());
    }

    #[test]
    fn adjacent_seeds_keep_their_regions() {
        let mut s = store(3);
        plant(&mut s, 1, 1, 1);
        plant(&mut s, 2, 1, 2);
        let mut growth = NearestSeedGrowth::new();
        for _ in 0..6 {
            growth.step(&mut s);
        }
        assert_eq!(regions_at(&s, 1, 1), vec![1]);
        assert_eq!(regions_at(&s, 2, 1), vec![2]);
        assert_eq!(s.cell(CellCoord::new(1, 1)).unwrap().distance(), Some(0));
    }

    // ── Late seeds and convergence ──────────────────────────────

    #[test]
    fn late_seed_corrects_nearer_cells() {
        let mut s = store(6);
        plant(&mut s, 0, 0, 1);
        let mut growth = NearestSeedGrowth::new();
        for _ in 0..12 {
            growth.step(&mut s);
        }
        assert_eq!(regions_at(&s, 6, 6), vec![1]);

        plant(&mut s, 6, 6, 2);
        for _ in 0..12 {
            growth.step(&mut s);
        }
        assert_eq!(regions_at(&s, 6, 5), vec![2]);
        assert_eq!(s.cell(CellCoord::new(6, 5)).unwrap().distance(), Some(1));
        assert_eq!(regions_at(&s, 0, 1), vec![1]);
        // (6, 0) is 6 from both seeds.
        assert_eq!(regions_at(&s, 6, 0), vec![1, 2]);
    }

    #[test]
    fn converged_grid_is_a_fixed_point() {
        let mut s = store(4);
        plant(&mut s, 1, 3, 1);
        plant(&mut s, 3, 0, 2);
        let mut growth = NearestSeedGrowth::new();
        for _ in 0..10 {
            growth.step(&mut s);
        }
        let before = s.cells().to_vec();
        let report = growth.step(&mut s);
        assert!(report.converged());
        assert_eq!(s.cells(), &before[..]);
    }

    #[test]
    fn reverse_scan_matches_row_major() {
        let mut a = store(5);
        let mut b = store(5);
        for s in [&mut a, &mut b] {
            plant(s, 1, 1, 1);
            plant(s, 4, 3, 2);
            plant(s, 0, 5, 3);
        }
        let mut forward = NearestSeedGrowth::new();
        let mut reverse = NearestSeedGrowth::builder()
            .scan_order(ScanOrder::Reverse)
            .build();
        assert_eq!(reverse.order(), ScanOrder::Reverse);
        for _ in 0..4 {
            forward.step(&mut a);
            reverse.step(&mut b);
            assert_eq!(a.cells(), b.cells());
        }
    }
}
