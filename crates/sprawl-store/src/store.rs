//! Double-buffered ownership store.

use log::trace;
use sprawl_core::{CellCoord, RegionId, RegionSet, SeedError, TickId};
use sprawl_space::Lattice;

use crate::cell::CellState;
use crate::read::Snapshot;

/// What [`OwnershipStore::plant_seed`] did to the target cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlantOutcome {
    /// The cell was unvisited and is now a seed.
    Planted,
    /// The cell was claimed by growth; its previous owners were replaced.
    Overwrote {
        /// The owners before planting.
        previous: RegionSet,
    },
    /// The cell already was this region's seed; nothing changed.
    Unchanged,
}

/// Split borrows handed to a growth step: the lattice, the frozen current
/// generation, and the staged next generation.
pub struct StepBuffers<'a> {
    /// Lattice topology.
    pub lattice: &'a Lattice,
    /// The authoritative generation, read-only for the whole step.
    pub current: &'a [CellState],
    /// The generation being staged, seeded as a copy of `current`.
    pub next: &'a mut [CellState],
}

/// Exclusive access to the store for the duration of one growth step.
///
/// Created by [`OwnershipStore::begin_step()`]. Dropping the guard without
/// calling [`publish()`](StepGuard::publish) discards the staged
/// generation; the current generation is left exactly as it was.
#[must_use]
pub struct StepGuard<'a> {
    store: &'a mut OwnershipStore,
}

impl<'a> StepGuard<'a> {
    /// Borrow the lattice, current, and next buffers at once.
    pub fn buffers(&mut self) -> StepBuffers<'_> {
        let store = &mut *self.store;
        let (current, next) = if store.b_is_current {
            (&store.buffer_b[..], &mut store.buffer_a[..])
        } else {
            (&store.buffer_a[..], &mut store.buffer_b[..])
        };
        StepBuffers {
            lattice: &store.lattice,
            current,
            next,
        }
    }

    /// Make the staged generation current.
    ///
    /// Returns the new generation number.
    pub fn publish(self) -> u64 {
        let store = self.store;
        store.b_is_current = !store.b_is_current;
        store.generation += 1;
        store.tick = store.tick.next();
        store.generation
    }
}

/// Per-cell ownership for a whole lattice, with two alternating buffers.
///
/// # Buffer layout
///
/// ```text
/// buffer_a: Vec<CellState>  ←─── current (b_is_current = false) / next
/// buffer_b: Vec<CellState>  ←─── next / current (b_is_current = true)
/// ```
///
/// Both buffers always hold `lattice.cell_count()` cells, so a step never
/// allocates once the store is built.
#[derive(Clone, Debug)]
pub struct OwnershipStore {
    lattice: Lattice,
    buffer_a: Vec<CellState>,
    buffer_b: Vec<CellState>,
    /// Which buffer is authoritative (false = A).
    b_is_current: bool,
    /// Number of published steps.
    generation: u64,
    tick: TickId,
}

impl OwnershipStore {
    /// Create a store with every cell unvisited.
    pub fn new(lattice: Lattice) -> Self {
        let n = lattice.cell_count();
        Self {
            lattice,
            buffer_a: vec![CellState::unvisited(); n],
            buffer_b: vec![CellState::unvisited(); n],
            b_is_current: false,
            generation: 0,
            tick: TickId(0),
        }
    }

    /// Lattice topology.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The authoritative cell buffer in row-major order.
    pub fn cells(&self) -> &[CellState] {
        if self.b_is_current {
            &self.buffer_b
        } else {
            &self.buffer_a
        }
    }

    fn cells_mut(&mut self) -> &mut [CellState] {
        if self.b_is_current {
            &mut self.buffer_b
        } else {
            &mut self.buffer_a
        }
    }

    /// Current state of `coord`, or `None` if it is off the lattice.
    pub fn cell(&self, coord: CellCoord) -> Option<&CellState> {
        self.lattice.index(coord).map(|i| &self.cells()[i])
    }

    /// Current state of the cell at a flat index.
    pub fn cell_at(&self, index: usize) -> Option<&CellState> {
        self.cells().get(index)
    }

    /// Whether `coord` is claimed by any region. Off-lattice cells never are.
    pub fn is_visited(&self, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(CellState::is_visited)
    }

    /// Whether `region` owns `coord`, alone or tied.
    pub fn owned_by(&self, region: RegionId, coord: CellCoord) -> bool {
        self.cell(coord).is_some_and(|c| c.owned_by(region))
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.cells().iter().filter(|c| c.is_visited()).count()
    }

    /// Whether every cell is visited.
    pub fn is_fully_visited(&self) -> bool {
        self.cells().iter().all(CellState::is_visited)
    }

    /// Number of cells `region` owns, counting ties.
    pub fn region_cell_count(&self, region: RegionId) -> usize {
        self.cells().iter().filter(|c| c.owned_by(region)).count()
    }

    /// Number of published steps since construction or reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tick of the current generation.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Borrow the current generation as a read-only snapshot.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.lattice, self.cells(), self.generation, self.tick)
    }

    /// Plant a seed: `coord` becomes distance 0, owned solely by `region`,
    /// in the current generation.
    ///
    /// Planting is immediate, unlike growth. The four lattice neighbours
    /// pick the seed up at distance 1 on the next step.
    ///
    /// # Errors
    ///
    /// - [`SeedError::OutOfBoundsSeed`] if `coord` is off the lattice
    /// - [`SeedError::SeedCollision`] if `coord` is another region's seed
    ///
    /// Whether planting over a cell claimed by growth is allowed is a
    /// policy decision left to the caller; the store always allows it.
    pub fn plant_seed(
        &mut self,
        coord: CellCoord,
        region: RegionId,
    ) -> Result<PlantOutcome, SeedError> {
        let side = self.lattice.side();
        let index = self
            .lattice
            .index(coord)
            .ok_or(SeedError::OutOfBoundsSeed {
                x: coord.x,
                y: coord.y,
                side,
            })?;
        let cell = &mut self.cells_mut()[index];
        if cell.is_seed() {
            if cell.owned_by(region) && !cell.is_tie() {
                return Ok(PlantOutcome::Unchanged);
            }
            if let Some(&existing) = cell.regions().iter().next() {
                return Err(SeedError::SeedCollision {
                    x: coord.x,
                    y: coord.y,
                    existing,
                });
            }
        }
        let outcome = if cell.is_visited() {
            PlantOutcome::Overwrote {
                previous: cell.regions().clone(),
            }
        } else {
            PlantOutcome::Planted
        };
        *cell = CellState::seed(region);
        trace!("planted region {region} at {coord}: {outcome:?}");
        Ok(outcome)
    }

    /// Start a growth step.
    ///
    /// The next buffer is overwritten with a copy of the current one, so a
    /// strategy only needs to touch the cells it changes.
    pub fn begin_step(&mut self) -> StepGuard<'_> {
        let (current, next) = if self.b_is_current {
            (&self.buffer_b, &mut self.buffer_a)
        } else {
            (&self.buffer_a, &mut self.buffer_b)
        };
        for (dst, src) in next.iter_mut().zip(current.iter()) {
            dst.assign(src);
        }
        StepGuard { store: self }
    }

    /// Clear every cell and the generation counter.
    pub fn reset(&mut self) {
        for cell in self.buffer_a.iter_mut().chain(self.buffer_b.iter_mut()) {
            cell.clear();
        }
        self.b_is_current = false;
        self.generation = 0;
        self.tick = TickId(0);
    }
}
