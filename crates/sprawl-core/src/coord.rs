//! Cell and lattice-corner coordinates.
//!
//! Both use screen orientation: `x` grows to the right, `y` grows
//! downward. A [`Corner`] `(x, y)` is the top-left corner of the cell
//! `(x, y)`, so a lattice of `side × side` cells has `(side + 1)²` corners.

use std::fmt;

/// A cell position on the lattice.
///
/// Signed so that pointer mapping and neighbour arithmetic can express
/// positions outside the lattice; bounds are checked by the consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Column, growing rightward.
    pub x: i32,
    /// Row, growing downward.
    pub y: i32,
}

impl CellCoord {
    /// Construct a cell coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The top-left corner of this cell.
    pub fn top_left(self) -> Corner {
        Corner::new(self.x, self.y)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A grid-intersection point, distinct from a cell.
///
/// The contour tracer walks corners, never cell centres.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner {
    /// Horizontal lattice index.
    pub x: i32,
    /// Vertical lattice index, growing downward.
    pub y: i32,
}

impl Corner {
    /// Construct a corner.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl From<(i32, i32)> for Corner {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offset_and_top_left() {
        let c = CellCoord::new(2, 3);
        assert_eq!(c.offset(-1, 1), CellCoord::new(1, 4));
        assert_eq!(c.top_left(), Corner::new(2, 3));
    }

    #[test]
    fn manhattan_counts_both_axes() {
        let a = CellCoord::new(1, 1);
        assert_eq!(a.manhattan(CellCoord::new(3, 1)), 2);
        assert_eq!(a.manhattan(CellCoord::new(0, 4)), 4);
    }

    #[test]
    fn display_forms_differ() {
        assert_eq!(CellCoord::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Corner::new(1, 2).to_string(), "<1, 2>");
    }

    proptest! {
        #[test]
        fn manhattan_is_symmetric(ax in -50i32..50, ay in -50i32..50, bx in -50i32..50, by in -50i32..50) {
            let a = CellCoord::new(ax, ay);
            let b = CellCoord::new(bx, by);
            prop_assert_eq!(a.manhattan(b), b.manhattan(a));
            prop_assert_eq!(a.manhattan(a), 0);
        }
    }
}
