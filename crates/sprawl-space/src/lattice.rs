//! Corner-indexed square lattice with a 4-connected neighbourhood.

use crate::direction::Direction;
use crate::error::SpaceError;
use smallvec::SmallVec;
use sprawl_core::{CellCoord, Corner};

/// A fixed-size square lattice of `side × side` cells.
///
/// The lattice is built from a grid `size` (the number of interior grid
/// lines); it holds `size + 1` cells per axis so that every cell has a
/// full ring of corners and boundary tracing needs no special edge cases.
/// Cell `(x, y)` lives at flat index `y * side + x` (row-major).
///
/// Neighbours are the four cardinal directions. A neighbour that would
/// fall outside the lattice is absent: edge cells have 3 neighbours and
/// corner cells have 2.
///
/// # Examples
///
/// ```
/// use sprawl_space::{Direction, Lattice};
/// use sprawl_core::CellCoord;
///
/// let lattice = Lattice::new(4).unwrap();
/// assert_eq!(lattice.side(), 5);
/// assert_eq!(lattice.cell_count(), 25);
///
/// let origin = CellCoord::new(0, 0);
/// assert_eq!(lattice.neighbour(origin, Direction::Up), None);
/// assert_eq!(lattice.neighbours(origin).len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    side: u32,
}

impl Lattice {
    /// Maximum cells per axis: coordinates use `i32`, and corner indices
    /// run one past the last cell.
    pub const MAX_SIDE: u32 = (i32::MAX - 1) as u32;

    /// Create the lattice for a grid of the given `size` (`size + 1` cells
    /// per axis).
    ///
    /// Returns `Err(SpaceError::DimensionTooLarge)` if the resulting side
    /// exceeds [`Lattice::MAX_SIDE`].
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        let side = size
            .checked_add(1)
            .ok_or(SpaceError::DimensionTooLarge {
                name: "size",
                value: u64::from(size),
                max: u64::from(Self::MAX_SIDE - 1),
            })?;
        Self::with_side(side)
    }

    /// Create a lattice with exactly `side` cells per axis.
    ///
    /// Returns `Err(SpaceError::EmptyLattice)` for `side == 0`.
    pub fn with_side(side: u32) -> Result<Self, SpaceError> {
        if side == 0 {
            return Err(SpaceError::EmptyLattice);
        }
        if side > Self::MAX_SIDE {
            return Err(SpaceError::DimensionTooLarge {
                name: "side",
                value: u64::from(side),
                max: u64::from(Self::MAX_SIDE),
            });
        }
        Ok(Self { side })
    }

    /// Cells per axis.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// The grid size this lattice was built for (`side - 1`).
    pub fn size(&self) -> u32 {
        self.side - 1
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.side as usize) * (self.side as usize)
    }

    /// Whether `coord` lies on the lattice.
    pub fn contains(&self, coord: CellCoord) -> bool {
        let n = self.side as i32;
        coord.x >= 0 && coord.x < n && coord.y >= 0 && coord.y < n
    }

    /// Whether `corner` lies on the corner lattice (`0..=side` per axis).
    pub fn contains_corner(&self, corner: Corner) -> bool {
        let n = self.side as i32;
        corner.x >= 0 && corner.x <= n && corner.y >= 0 && corner.y <= n
    }

    /// Flat index of `coord`, or `None` if it is off the lattice.
    pub fn index(&self, coord: CellCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.side as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Flat index of `coord`, or a [`SpaceError::CellOutOfBounds`].
    pub fn check(&self, coord: CellCoord) -> Result<usize, SpaceError> {
        self.index(coord).ok_or(SpaceError::CellOutOfBounds {
            coord,
            side: self.side,
        })
    }

    /// Coordinate of a flat index. The index must be below
    /// [`cell_count`](Self::cell_count).
    pub fn coord(&self, index: usize) -> CellCoord {
        let side = self.side as usize;
        CellCoord::new((index % side) as i32, (index / side) as i32)
    }

    /// The adjacent cell in `direction`, if it exists.
    pub fn neighbour(&self, coord: CellCoord, direction: Direction) -> Option<CellCoord> {
        let (dx, dy) = direction.offset();
        let nb = coord.offset(dx, dy);
        self.contains(nb).then_some(nb)
    }

    /// Flat-index form of [`neighbour`](Self::neighbour).
    pub fn neighbour_index(&self, index: usize, direction: Direction) -> Option<usize> {
        let side = self.side as usize;
        let x = index % side;
        let y = index / side;
        match direction {
            Direction::Up => (y > 0).then(|| index - side),
            Direction::Right => (x + 1 < side).then(|| index + 1),
            Direction::Down => (y + 1 < side).then(|| index + side),
            Direction::Left => (x > 0).then(|| index - 1),
        }
    }

    /// The present neighbours of `coord` in scan order (up, right, down, left).
    pub fn neighbours(&self, coord: CellCoord) -> SmallVec<[(Direction, CellCoord); 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbour(coord, d).map(|nb| (d, nb)))
            .collect()
    }

    /// All cells in row-major canonical order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.cell_count()).map(move |i| self.coord(i))
    }

    /// The four outer corners, clockwise from the top-left.
    pub fn outer_corners(&self) -> [Corner; 4] {
        let n = self.side as i32;
        [
            Corner::new(0, 0),
            Corner::new(n, 0),
            Corner::new(n, n),
            Corner::new(0, n),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> CellCoord {
        CellCoord::new(x, y)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn size_four_has_five_cells_per_axis() {
        let l = Lattice::new(4).unwrap();
        assert_eq!(l.side(), 5);
        assert_eq!(l.size(), 4);
        assert_eq!(l.cell_count(), 25);
    }

    #[test]
    fn zero_size_is_a_single_cell() {
        let l = Lattice::new(0).unwrap();
        assert_eq!(l.cell_count(), 1);
        assert!(l.neighbours(c(0, 0)).is_empty());
    }

    #[test]
    fn zero_side_is_rejected() {
        assert!(matches!(Lattice::with_side(0), Err(SpaceError::EmptyLattice)));
    }

    #[test]
    fn oversized_side_is_rejected() {
        assert!(matches!(
            Lattice::new(u32::MAX),
            Err(SpaceError::DimensionTooLarge { name: "size", .. })
        ));
        assert!(matches!(
            Lattice::with_side(Lattice::MAX_SIDE + 1),
            Err(SpaceError::DimensionTooLarge { name: "side", .. })
        ));
    }

    // ── Index tests ─────────────────────────────────────────────

    #[test]
    fn index_is_row_major() {
        let l = Lattice::new(4).unwrap();
        assert_eq!(l.index(c(0, 0)), Some(0));
        assert_eq!(l.index(c(4, 0)), Some(4));
        assert_eq!(l.index(c(0, 1)), Some(5));
        assert_eq!(l.index(c(2, 2)), Some(12));
        assert_eq!(l.coord(12), c(2, 2));
    }

    #[test]
    fn out_of_bounds_has_no_index() {
        let l = Lattice::new(4).unwrap();
        assert_eq!(l.index(c(5, 0)), None);
        assert_eq!(l.index(c(-1, 2)), None);
        assert!(matches!(
            l.check(c(0, 5)),
            Err(SpaceError::CellOutOfBounds { side: 5, .. })
        ));
    }

    #[test]
    fn corner_lattice_is_one_larger() {
        let l = Lattice::new(4).unwrap();
        assert!(l.contains_corner(Corner::new(5, 5)));
        assert!(!l.contains_corner(Corner::new(6, 0)));
        assert_eq!(l.outer_corners()[2], Corner::new(5, 5));
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn interior_has_four_neighbours_in_scan_order() {
        let l = Lattice::new(4).unwrap();
        let n = l.neighbours(c(2, 2));
        let got: Vec<_> = n.iter().copied().collect();
        assert_eq!(
            got,
            vec![
                (Direction::Up, c(2, 1)),
                (Direction::Right, c(3, 2)),
                (Direction::Down, c(2, 3)),
                (Direction::Left, c(1, 2)),
            ]
        );
    }

    #[test]
    fn corner_cell_has_two_neighbours() {
        let l = Lattice::new(4).unwrap();
        assert_eq!(l.neighbours(c(4, 4)).len(), 2);
        assert_eq!(l.neighbour(c(4, 4), Direction::Right), None);
        assert_eq!(l.neighbour(c(4, 4), Direction::Down), None);
    }

    #[test]
    fn edge_cell_has_three_neighbours() {
        let l = Lattice::new(4).unwrap();
        assert_eq!(l.neighbours(c(2, 0)).len(), 3);
    }

    #[test]
    fn neighbour_index_matches_coordinate_form() {
        let l = Lattice::new(6).unwrap();
        for coord in l.cells() {
            let i = l.index(coord).unwrap();
            for d in Direction::ALL {
                assert_eq!(
                    l.neighbour_index(i, d),
                    l.neighbour(coord, d).and_then(|nb| l.index(nb)),
                    "mismatch at {coord} going {d:?}"
                );
            }
        }
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_small() {
        compliance::run_full_compliance(&Lattice::new(1).unwrap());
        compliance::run_full_compliance(&Lattice::new(7).unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn index_roundtrips(size in 0u32..20, x in 0i32..21, y in 0i32..21) {
            let l = Lattice::new(size).unwrap();
            let coord = c(x, y);
            match l.index(coord) {
                Some(i) => prop_assert_eq!(l.coord(i), coord),
                None => prop_assert!(x >= l.side() as i32 || y >= l.side() as i32),
            }
        }
    }
}
