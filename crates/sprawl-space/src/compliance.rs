//! Lattice topology compliance checks.
//!
//! Reused by the lattice tests across several sizes.

use crate::direction::Direction;
use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`, and that
/// the relationship goes through opposite directions.
pub fn assert_neighbours_symmetric(lattice: &Lattice) {
    for coord in lattice.cells() {
        for (d, nb) in lattice.neighbours(coord) {
            assert_eq!(
                lattice.neighbour(nb, d.opposite()),
                Some(coord),
                "neighbour symmetry violated: {nb} is {d:?} of {coord} but not the reverse"
            );
        }
    }
}

/// Assert that every neighbour is at Manhattan distance exactly 1.
pub fn assert_neighbours_adjacent(lattice: &Lattice) {
    for coord in lattice.cells() {
        for (_, nb) in lattice.neighbours(coord) {
            assert_eq!(coord.manhattan(nb), 1, "{nb} is not adjacent to {coord}");
        }
    }
}

/// Assert that the canonical ordering visits every cell exactly once.
pub fn assert_canonical_ordering_complete(lattice: &Lattice) {
    let ordering: Vec<_> = lattice.cells().collect();
    assert_eq!(ordering.len(), lattice.cell_count());
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), lattice.cell_count(), "cells() has duplicates");
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(lattice.index(*coord), Some(i), "cells() is not row-major");
    }
}

/// Assert the neighbour count totals: `4·side² − 4·side` directed edges.
pub fn assert_edge_count(lattice: &Lattice) {
    let directed: usize = lattice
        .cells()
        .map(|c| {
            Direction::ALL
                .into_iter()
                .filter(|&d| lattice.neighbour(c, d).is_some())
                .count()
        })
        .sum();
    let side = lattice.side() as usize;
    assert_eq!(directed, 4 * side * side - 4 * side);
}

/// Run every compliance check on a lattice.
pub fn run_full_compliance(lattice: &Lattice) {
    assert_neighbours_symmetric(lattice);
    assert_neighbours_adjacent(lattice);
    assert_canonical_ordering_complete(lattice);
    assert_edge_count(lattice);
}
