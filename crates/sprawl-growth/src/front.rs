//! Front-tracking growth.
//!
//! Every cell carries a [`SideMask`] of sides it has not yet grown
//! through. Each step, every frontier cell falls through all of its open
//! sides at once:
//!
//! ```text
//!        UP
//!      ┌────┐
//! LEFT │ src│ RIGHT    crossing a side closes it on both cells
//!      └────┘
//!       DOWN
//! ```
//!
//! An unvisited destination is claimed at the smallest source distance
//! plus one; equal offers in the same step union their owners. A visited
//! destination is never relabelled, so the first claim wins. The cells
//! claimed this step form the next frontier.
//!
//! When every seed is planted before growth starts, the result is the
//! same labelling as [`NearestSeedGrowth`](crate::NearestSeedGrowth).
//! Seeds planted later only grow into cells nobody has claimed yet.

use bitflags::bitflags;
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;
use sprawl_core::{CellCoord, RegionId, RegionSet};
use sprawl_space::{Direction, Lattice};
use sprawl_store::{OwnershipStore, StepBuffers};

use crate::frontier::Frontier;
use crate::strategy::{GrowthStrategy, StepReport};

bitflags! {
    /// Sides of a cell that growth has not crossed yet.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SideMask: u8 {
        /// Toward `y - 1`.
        const UP = 0b1000;
        /// Toward `x + 1`.
        const RIGHT = 0b0100;
        /// Toward `y + 1`.
        const DOWN = 0b0010;
        /// Toward `x - 1`.
        const LEFT = 0b0001;
    }
}

impl From<Direction> for SideMask {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Right => Self::RIGHT,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
        }
    }
}

impl SideMask {
    /// Sides of `index` that have a neighbour on `lattice`.
    pub fn interior(lattice: &Lattice, index: usize) -> Self {
        Direction::ALL
            .into_iter()
            .filter(|&d| lattice.neighbour_index(index, d).is_some())
            .fold(Self::empty(), |mask, d| mask | Self::from(d))
    }
}

/// Growth by an explicit frontier of cells falling through open sides.
#[derive(Clone, Debug, Default)]
pub struct FrontTrackingGrowth {
    open: Vec<SideMask>,
    frontier: Frontier,
}

impl FrontTrackingGrowth {
    /// A strategy with no frontier. Side masks are sized on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells that will grow on the next step.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Open sides of the cell at `index`, or `None` before the first seed
    /// or step.
    pub fn open_sides(&self, index: usize) -> Option<SideMask> {
        self.open.get(index).copied()
    }

    fn ensure_sized(&mut self, lattice: &Lattice) {
        if self.open.len() != lattice.cell_count() {
            self.open = (0..lattice.cell_count())
                .map(|i| SideMask::interior(lattice, i))
                .collect();
            self.frontier.clear();
        }
    }
}

impl GrowthStrategy for FrontTrackingGrowth {
    fn name(&self) -> &str {
        "FrontTrackingGrowth"
    }

    fn on_seed(&mut self, lattice: &Lattice, coord: CellCoord, _region: RegionId) {
        self.ensure_sized(lattice);
        if let Some(index) = lattice.index(coord) {
            self.open[index] = SideMask::interior(lattice, index);
            self.frontier.insert(index);
        }
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
            self.ensure_sized(lattice);

            let mut claims: IndexMap<usize, (u32, RegionSet)> = IndexMap::new();
            for src in self.frontier.iter() {
                let source = &current[src];
                let Some(src_distance) = source.distance() else {
                    continue;
                };
                let offer = src_distance.saturating_add(1);
                for direction in Direction::ALL {
                    let side = SideMask::from(direction);
                    if !self.open[src].contains(side) {
                        continue;
                    }
                    self.open[src].remove(side);
                    let Some(dst) = lattice.neighbour_index(src, direction) else {
                        continue;
                    };
                    self.open[dst].remove(SideMask::from(direction.opposite()));
                    if current[dst].is_visited() {
                        continue;
                    }
                    match claims.entry(dst) {
                        Entry::Vacant(e) => {
                            e.insert((offer, source.regions().clone()));
                        }
                        Entry::Occupied(mut e) => {
                            let (best, owners) = e.get_mut();
                            if offer < *best {
                                *best = offer;
                                owners.assign(source.regions());
                            } else if offer == *best {
                                owners.union_with(source.regions());
                            }
                        }
                    }
                }
            }

            let mut frontier = Frontier::new();
            for (dst, (distance, owners)) in claims {
                next[dst].set_claim(distance, &owners);
                frontier.insert(dst);
            }
            self.frontier = frontier;

            report.newly_visited = self.frontier.len();
            report.changed = self.frontier.len();
            for cell in next.iter().filter(|c| c.is_visited()) {
                report.visited += 1;
                if cell.is_tie() {
                    report.tie_cells += 1;
                }
            }
        }
        report.generation = guard.publish();

        debug!(
            "{} gen {}: +{} visited, frontier {}, {} ties, {} total",
            self.name(),
            report.generation,
            report.newly_visited,
            self.frontier.len(),
            report.tie_cells,
            report.visited
        );
        report
    }

    fn reset(&mut self) {
        self.open.clear();
        self.frontier.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(size: u32) -> (OwnershipStore, FrontTrackingGrowth) {
        let store = OwnershipStore::new(Lattice::new(size).unwrap());
        (store, FrontTrackingGrowth::new())
    }

    fn plant(s: &mut OwnershipStore, g: &mut FrontTrackingGrowth, x: i32, y: i32, region: u16) {
        let coord = CellCoord::new(x, y);
        s.plant_seed(coord, RegionId(region)).unwrap();
        g.on_seed(s.lattice(), coord, RegionId(region));
    }

    // ── Side masks ──────────────────────────────────────────────

    #[test]
    fn interior_mask_drops_border_sides() {
        let lattice = Lattice::new(2).unwrap();
        let top_left = lattice.index(CellCoord::new(0, 0)).unwrap();
        let centre = lattice.index(CellCoord::new(1, 1)).unwrap();
        assert_eq!(
            SideMask::interior(&lattice, top_left),
            SideMask::RIGHT | SideMask::DOWN
        );
        assert_eq!(SideMask::interior(&lattice, centre), SideMask::all());
    }

    #[test]
    fn crossing_closes_both_sides() {
        let (mut s, mut g) = setup(2);
        plant(&mut s, &mut g, 1, 1, 1);
        g.step(&mut s);
        let lattice = s.lattice();
        let centre = lattice.index(CellCoord::new(1, 1)).unwrap();
        let above = lattice.index(CellCoord::new(1, 0)).unwrap();
        assert_eq!(g.open_sides(centre), Some(SideMask::empty()));
        assert!(!g.open_sides(above).unwrap().contains(SideMask::DOWN));
        assert!(g.open_sides(above).unwrap().contains(SideMask::LEFT));
    }

    // ── Frontier ────────────────────────────────────────────────

    #[test]
    fn frontier_advances_one_layer_per_step() {
        let (mut s, mut g) = setup(4);
        plant(&mut s, &mut g, 2, 2, 1);
        assert_eq!(g.frontier().len(), 1);

        let report = g.step(&mut s);
        assert_eq!(report.newly_visited, 4);
        assert_eq!(g.frontier().len(), 4);

        let report = g.step(&mut s);
        assert_eq!(report.newly_visited, 8);
        assert_eq!(report.visited, 13);
        assert_eq!(s.cell(CellCoord::new(0, 2)).unwrap().distance(), Some(2));
    }

    #[test]
    fn exhausted_frontier_converges() {
        let (mut s, mut g) = setup(1);
        plant(&mut s, &mut g, 0, 0, 1);
        g.step(&mut s);
        g.step(&mut s);
        // (1, 1) was claimed from both sides and has nothing left to open.
        assert_eq!(g.frontier().len(), 1);
        let report = g.step(&mut s);
        assert!(report.converged());
        assert!(g.frontier().is_empty());
        assert_eq!(report.visited, 4);
    }

    #[test]
    fn simultaneous_claims_tie() {
        let (mut s, mut g) = setup(2);
        plant(&mut s, &mut g, 0, 1, 1);
        plant(&mut s, &mut g, 2, 1, 2);
        g.step(&mut s);
        let cell = s.cell(CellCoord::new(1, 1)).unwrap();
        assert_eq!(cell.distance(), Some(1));
        assert!(cell.is_tie());
    }

    #[test]
    fn first_claim_wins_over_late_seed() {
        let (mut s, mut g) = setup(4);
        plant(&mut s, &mut g, 0, 0, 1);
        for _ in 0..3 {
            g.step(&mut s);
        }
        assert!(s.is_visited(CellCoord::new(2, 1)));
        plant(&mut s, &mut g, 4, 4, 2);
        for _ in 0..8 {
            g.step(&mut s);
        }
        assert!(s.cell(CellCoord::new(2, 1)).unwrap().owned_by(RegionId(1)));
        assert!(!s.cell(CellCoord::new(2, 1)).unwrap().owned_by(RegionId(2)));
        assert!(s.cell(CellCoord::new(4, 3)).unwrap().owned_by(RegionId(2)));
        assert!(s.snapshot().is_fully_visited());
    }

    #[test]
    fn reset_forgets_frontier() {
        let (mut s, mut g) = setup(3);
        plant(&mut s, &mut g, 1, 1, 1);
        g.reset();
        assert!(g.frontier().is_empty());
        assert_eq!(g.open_sides(0), None);
    }
}
