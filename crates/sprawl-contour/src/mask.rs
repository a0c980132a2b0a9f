//! Boolean ownership mask of one region, with connectivity checks.

use std::collections::VecDeque;

use sprawl_core::{CellCoord, RegionId};
use sprawl_space::{Direction, Lattice};
use sprawl_store::Snapshot;

/// Which cells of a lattice one region owns, alone or tied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMask {
    lattice: Lattice,
    owned: Vec<bool>,
    count: usize,
}

impl RegionMask {
    /// Mask of the cells `region` owns in `snapshot`.
    pub fn from_snapshot(snapshot: &Snapshot<'_>, region: RegionId) -> Self {
        let owned: Vec<bool> = snapshot
            .cells()
            .iter()
            .map(|c| c.owned_by(region))
            .collect();
        Self::from_bits(snapshot.lattice().clone(), owned)
    }

    /// Mask from one flag per cell in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `owned.len()` differs from the lattice cell count.
    pub fn from_bits(lattice: Lattice, owned: Vec<bool>) -> Self {
        assert_eq!(
            owned.len(),
            lattice.cell_count(),
            "mask length must match the lattice"
        );
        let count = owned.iter().filter(|&&b| b).count();
        Self {
            lattice,
            owned,
            count,
        }
    }

    /// Lattice the mask covers.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Whether `coord` is owned. Off-lattice cells never are.
    pub fn owned(&self, coord: CellCoord) -> bool {
        self.lattice.index(coord).is_some_and(|i| self.owned[i])
    }

    /// Number of owned cells.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether no cell is owned.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// First owned cell in row-major order.
    pub fn first(&self) -> Option<CellCoord> {
        self.owned
            .iter()
            .position(|&b| b)
            .map(|i| self.lattice.coord(i))
    }

    /// Number of edge-connected pieces of owned cells.
    pub fn components(&self) -> usize {
        self.count_pieces(true, &mut vec![false; self.owned.len()])
    }

    /// Number of edge-connected pieces of unowned cells that cannot reach
    /// the lattice border.
    pub fn holes(&self) -> usize {
        let mut seen = vec![false; self.owned.len()];
        let border: Vec<usize> = (0..self.owned.len())
            .filter(|&i| !self.owned[i] && self.on_border(i))
            .collect();
        for start in border {
            if !seen[start] {
                self.flood(start, false, &mut seen);
            }
        }
        self.count_pieces(false, &mut seen)
    }

    fn on_border(&self, index: usize) -> bool {
        Direction::ALL
            .into_iter()
            .any(|d| self.lattice.neighbour_index(index, d).is_none())
    }

    fn count_pieces(&self, value: bool, seen: &mut [bool]) -> usize {
        let mut pieces = 0;
        for start in 0..self.owned.len() {
            if self.owned[start] == value && !seen[start] {
                self.flood(start, value, seen);
                pieces += 1;
            }
        }
        pieces
    }

    /// Breadth-first fill of the cells equal to `value` reachable from `start`.
    fn flood(&self, start: usize, value: bool, seen: &mut [bool]) {
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(index) = queue.pop_front() {
            for d in Direction::ALL {
                if let Some(nb) = self.lattice.neighbour_index(index, d) {
                    if self.owned[nb] == value && !seen[nb] {
                        seen[nb] = true;
                        queue.push_back(nb);
                    }
                }
            }
        }
    }
}
