//! Per-cell ownership record.

use sprawl_core::{RegionId, RegionSet};

/// Ownership of a single cell.
///
/// A cell is *visited* iff it has at least one region; an unvisited cell
/// has no distance (the "unreached" sentinel). The mutators keep both
/// halves consistent, which is why the fields are private.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellState {
    distance: Option<u32>,
    regions: RegionSet,
}

impl CellState {
    /// An unvisited cell.
    pub fn unvisited() -> Self {
        Self::default()
    }

    /// A seed cell owned solely by `region` at distance 0.
    pub fn seed(region: RegionId) -> Self {
        Self {
            distance: Some(0),
            regions: RegionSet::single(region),
        }
    }

    /// A cell claimed at `distance` by `regions`.
    ///
    /// An empty `regions` produces an unvisited cell.
    pub fn claimed(distance: u32, regions: RegionSet) -> Self {
        if regions.is_empty() {
            return Self::unvisited();
        }
        Self {
            distance: Some(distance),
            regions,
        }
    }

    /// Distance to the nearest owning seed, `None` when unreached.
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// Regions tied for the minimum distance.
    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// Whether any region claims this cell.
    pub fn is_visited(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Whether this cell is a seed origin.
    pub fn is_seed(&self) -> bool {
        self.distance == Some(0)
    }

    /// Whether two or more regions are tied here.
    pub fn is_tie(&self) -> bool {
        self.regions.is_tie()
    }

    /// Whether `region` owns this cell, alone or tied.
    pub fn owned_by(&self, region: RegionId) -> bool {
        self.regions.contains(region)
    }

    /// Overwrite with a claim at `distance` by `regions`.
    ///
    /// An empty `regions` leaves the cell unvisited.
    pub fn set_claim(&mut self, distance: u32, regions: &RegionSet) {
        if regions.is_empty() {
            self.clear();
            return;
        }
        self.distance = Some(distance);
        self.regions.assign(regions);
    }

    /// Union `regions` into a visited cell's owner set.
    ///
    /// Ignored on an unvisited cell, which has no distance to tie with.
    pub fn union_regions(&mut self, regions: &RegionSet) {
        if self.is_visited() {
            self.regions.union_with(regions);
        }
    }

    /// Copy `other` into `self`, reusing storage.
    pub fn assign(&mut self, other: &CellState) {
        self.distance = other.distance;
        self.regions.assign(&other.regions);
    }

    /// Reset to unvisited.
    pub fn clear(&mut self) {
        self.distance = None;
        self.regions.clear();
    }
}
