//! Ordered, duplicate-free set of frontier cells.

use indexmap::IndexSet;

/// Cells that will try to grow on the next step, by flat index.
///
/// Iteration follows insertion order, which keeps front-tracking growth
/// deterministic. Inserting a cell twice is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
    cells: IndexSet<usize>,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell. Returns `false` if it was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        self.cells.insert(index)
    }

    /// Whether `index` is on the frontier.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Number of frontier cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the frontier is exhausted.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }

    /// Remove every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl FromIterator<usize> for Frontier {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
