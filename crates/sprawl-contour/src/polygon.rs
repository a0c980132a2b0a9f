//! Closed rectilinear polygons on the corner lattice.

use sprawl_core::{CellCoord, Corner};

/// A closed polygon whose vertices are lattice corners.
///
/// The last vertex connects back to the first. Consecutive edges are axis
/// aligned and every vertex is a change of heading, so no three
/// consecutive vertices are collinear.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygon {
    vertices: Vec<Corner>,
}

impl Polygon {
    /// Wrap a vertex list. No validation is done.
    pub fn new(vertices: Vec<Corner>) -> Self {
        Self { vertices }
    }

    /// Vertices in walk order.
    pub fn vertices(&self) -> &[Corner] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closed edges `(from, to)`, including the one back to the start.
    pub fn edges(&self) -> impl Iterator<Item = (Corner, Corner)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area in cells.
    ///
    /// Positive when the walk is clockwise on a y-down screen, which is
    /// how the tracer emits polygons.
    pub fn signed_area(&self) -> i64 {
        let twice: i64 = self
            .edges()
            .map(|(a, b)| i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y))
            .sum();
        twice / 2
    }

    /// Whether the centre of `cell` lies inside the polygon.
    ///
    /// Works in doubled coordinates so that the centre is never on an edge
    /// or level with a vertex: a ray toward `+x` crosses vertical edges only.
    pub fn contains_cell_center(&self, cell: CellCoord) -> bool {
        let px = 2 * i64::from(cell.x) + 1;
        let py = 2 * i64::from(cell.y) + 1;
        let crossings = self
            .edges()
            .filter(|(a, b)| a.x == b.x)
            .filter(|(a, b)| {
                let x = 2 * i64::from(a.x);
                let (lo, hi) = (2 * i64::from(a.y.min(b.y)), 2 * i64::from(a.y.max(b.y)));
                x > px && lo < py && py < hi
            })
            .count();
        crossings % 2 == 1
    }
}

impl From<Vec<Corner>> for Polygon {
    fn from(vertices: Vec<Corner>) -> Self {
        Self::new(vertices)
    }
}
