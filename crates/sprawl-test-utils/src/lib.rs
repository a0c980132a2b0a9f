//! Test fixtures and reference oracles for Sprawl development.
//!
//! - [`manhattan_labelling`]: brute-force nearest-seed labelling to check
//!   growth strategies against.
//! - [`seeded_store`] / [`store_from_ascii`]: quick store construction.
//! - [`fixtures`]: named ownership shapes for contour tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use sprawl_core::{CellCoord, RegionId, RegionSet};
use sprawl_space::Lattice;
use sprawl_store::{CellState, OwnershipStore, StepBuffers};

pub fn lattice(size: u32) -> Lattice {
    Lattice::new(size).expect("test lattice size should be valid")
}

/// A store on a `size` lattice with the given `(x, y, region)` seeds planted.
pub fn seeded_store(size: u32, seeds: &[(i32, i32, u16)]) -> OwnershipStore {
    let mut store = OwnershipStore::new(lattice(size));
    for &(x, y, region) in seeds {
        store
            .plant_seed(CellCoord::new(x, y), RegionId(region))
            .expect("fixture seed should plant");
    }
    store
}

/// Expected converged ownership for `seeds` by exhaustive search.
///
/// Each cell gets the minimum Manhattan distance over all seeds and every
/// region achieving it. With no seeds every cell is unvisited.
pub fn manhattan_labelling(lattice: &Lattice, seeds: &[(CellCoord, RegionId)]) -> Vec<CellState> {
    lattice
        .cells()
        .map(|cell| {
            let Some(best) = seeds.iter().map(|(s, _)| s.manhattan(cell)).min() else {
                return CellState::unvisited();
            };
            let regions: RegionSet = seeds
                .iter()
                .filter(|(s, _)| s.manhattan(cell) == best)
                .map(|&(_, r)| r)
                .collect();
            CellState::claimed(best, regions)
        })
        .collect()
}

/// Build a published store from a square character map.
///
/// - `.` unvisited
/// - `0`..=`9` owned by that region at distance 1
/// - `*` tied between regions 1 and 2 at distance 1
///
/// Row `y` of the map is lattice row `y`.
pub fn store_from_ascii(rows: &[&str]) -> OwnershipStore {
    let side = rows.len() as u32;
    let lattice = Lattice::with_side(side).expect("ascii map should be non-empty");
    let mut store = OwnershipStore::new(lattice);
    {
        let mut guard = store.begin_step();
        {
            let StepBuffers { next, .. } = guard.buffers();
            for (y, row) in rows.iter().enumerate() {
                assert_eq!(row.len(), rows.len(), "ascii map must be square");
                for (x, ch) in row.chars().enumerate() {
                    let index = y * rows.len() + x;
                    next[index] = match ch {
                        '.' => CellState::unvisited(),
                        '*' => CellState::claimed(
                            1,
                            [RegionId(1), RegionId(2)].into_iter().collect(),
                        ),
                        d => {
                            let region = d.to_digit(10).expect("ascii cell should be . * or a digit");
                            CellState::claimed(1, RegionSet::single(RegionId(region as u16)))
                        }
                    };
                }
            }
        }
        guard.publish();
    }
    store
}

/// Render ownership as a character map (inverse of [`store_from_ascii`]).
///
/// Ties print as `*`; regions above 9 print as `#`.
pub fn ascii_map(store: &OwnershipStore) -> Vec<String> {
    let side = store.lattice().side() as usize;
    store
        .cells()
        .chunks(side)
        .map(|row| {
            row.iter()
                .map(|cell| match cell.regions().as_slice() {
                    [] => '.',
                    [r] if r.0 <= 9 => char::from(b'0' + r.0 as u8),
                    [_] => '#',
                    _ => '*',
                })
                .collect()
        })
        .collect()
}
