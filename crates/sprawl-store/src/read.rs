//! Read-only view of the current generation.

use std::collections::BTreeMap;

use sprawl_core::{CellCoord, RegionId, TickId};
use sprawl_space::Lattice;

use crate::cell::CellState;

/// A borrowed, read-only view of one published generation.
///
/// Handed to the contour tracer and the renderer between steps. Holding a
/// `Snapshot` borrows the store, so no step can run while it is alive.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    lattice: &'a Lattice,
    cells: &'a [CellState],
    generation: u64,
    tick: TickId,
}

impl<'a> Snapshot<'a> {
    /// Build a snapshot over an arbitrary cell buffer.
    ///
    /// `cells` must hold exactly `lattice.cell_count()` entries in
    /// row-major order.
    pub fn new(lattice: &'a Lattice, cells: &'a [CellState], generation: u64, tick: TickId) -> Self {
        debug_assert_eq!(cells.len(), lattice.cell_count());
        Self {
            lattice,
            cells,
            generation,
            tick,
        }
    }

    /// Lattice topology.
    pub fn lattice(&self) -> &'a Lattice {
        self.lattice
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &'a [CellState] {
        self.cells
    }

    /// State of `coord`, or `None` if it is off the lattice.
    pub fn cell(&self, coord: CellCoord) -> Option<&'a CellState> {
        self.lattice.index(coord).map(|i| &self.cells[i])
    }

    /// Whether `region` owns `coord`. Off-lattice cells are owned by nobody.
    pub fn owned_by(&self, region: RegionId, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(|c| c.owned_by(region))
    }

    /// Whether `coord` is claimed by anyone.
    pub fn is_visited(&self, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(CellState::is_visited)
    }

    /// Number of claimed cells.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visited()).count()
    }

    /// Whether every cell is claimed.
    pub fn is_fully_visited(&self) -> bool {
        self.cells.iter().all(CellState::is_visited)
    }

    /// Number of tie cells.
    pub fn tie_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_tie()).count()
    }

    /// Number of cells `region` owns, alone or tied.
    pub fn region_cell_count(&self, region: RegionId) -> usize {
        self.cells.iter().filter(|c| c.owned_by(region)).count()
    }

    /// Cell counts for every region present, in ascending region order.
    pub fn region_areas(&self) -> BTreeMap<RegionId, usize> {
        let mut areas = BTreeMap::new();
        for cell in self.cells {
            for &region in cell.regions() {
                *areas.entry(region).or_insert(0) += 1;
            }
        }
        areas
    }

    /// Number of published steps behind this generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tick of this generation.
    pub fn tick(&self) -> TickId {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::OwnershipStore;
    use sprawl_core::RegionSet;

    #[test]
    fn counts_reflect_ownership() {
        let mut store = OwnershipStore::new(Lattice::new(2).unwrap());
        store.plant_seed(CellCoord::new(0, 0), RegionId(10)).unwrap();
        store.plant_seed(CellCoord::new(2, 2), RegionId(20)).unwrap();
        {
            let mut guard = store.begin_step();
            let bufs = guard.buffers();
            let tie: RegionSet = [RegionId(10), RegionId(20)].into_iter().collect();
            bufs.next[4].set_claim(2, &tie);
            guard.publish();
        }

        let snap = store.snapshot();
        assert_eq!(snap.visited_count(), 3);
        assert_eq!(snap.tie_count(), 1);
        assert_eq!(snap.region_cell_count(RegionId(10)), 2);
        assert!(snap.owned_by(RegionId(20), CellCoord::new(1, 1)));
        assert!(!snap.owned_by(RegionId(20), CellCoord::new(9, 9)));
        assert!(!snap.is_fully_visited());
        assert_eq!(snap.generation(), 1);

        let areas = snap.region_areas();
        assert_eq!(areas.get(&RegionId(10)), Some(&2));
        assert_eq!(areas.get(&RegionId(20)), Some(&2));
    }
}
