//! Tie-aware set of region ids.

use crate::id::RegionId;
use smallvec::SmallVec;

/// The regions tied for minimum distance to a cell.
///
/// Kept sorted ascending and duplicate-free so that two sets built from
/// the same members in different orders compare equal. Almost every cell
/// has one owner and tie cells rarely have more than two, so the set lives
/// inline for up to two members.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegionSet {
    members: SmallVec<[RegionId; 2]>,
}

impl RegionSet {
    /// An empty set (an unvisited cell).
    pub fn new() -> Self {
        Self::default()
    }

    /// A set containing only `region`.
    pub fn single(region: RegionId) -> Self {
        let mut members = SmallVec::new();
        members.push(region);
        Self { members }
    }

    /// Insert `region`. Returns `true` if it was not already present.
    pub fn insert(&mut self, region: RegionId) -> bool {
        match self.members.binary_search(&region) {
            Ok(_) => false,
            Err(pos) => {
                self.members.insert(pos, region);
                true
            }
        }
    }

    /// Union `other` into `self` without duplicates.
    pub fn union_with(&mut self, other: &RegionSet) {
        for &region in &other.members {
            self.insert(region);
        }
    }

    /// Replace the contents with a copy of `other`, reusing storage.
    pub fn assign(&mut self, other: &RegionSet) {
        self.members.clear();
        self.members.extend_from_slice(&other.members);
    }

    /// Whether `region` is a member.
    pub fn contains(&self, region: RegionId) -> bool {
        self.members.binary_search(&region).is_ok()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether more than one region claims the cell.
    pub fn is_tie(&self) -> bool {
        self.members.len() > 1
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Members in ascending order.
    pub fn as_slice(&self) -> &[RegionId] {
        &self.members
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, RegionId> {
        self.members.iter()
    }
}

impl FromIterator<RegionId> for RegionSet {
    fn from_iter<I: IntoIterator<Item = RegionId>>(iter: I) -> Self {
        let mut set = Self::new();
        for region in iter {
            set.insert(region);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a RegionId;
    type IntoIter = std::slice::Iter<'a, RegionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn r(v: u16) -> RegionId {
        RegionId(v)
    }

    #[test]
    fn insert_keeps_sorted_and_unique() {
        let mut s = RegionSet::new();
        assert!(s.insert(r(200)));
        assert!(s.insert(r(10)));
        assert!(!s.insert(r(200)));
        assert_eq!(s.as_slice(), &[r(10), r(200)]);
        assert!(s.is_tie());
    }

    #[test]
    fn union_discards_duplicates() {
        let mut a: RegionSet = [r(1), r(5)].into_iter().collect();
        let b: RegionSet = [r(5), r(3)].into_iter().collect();
        a.union_with(&b);
        assert_eq!(a.as_slice(), &[r(1), r(3), r(5)]);
    }

    #[test]
    fn assign_replaces_contents() {
        let mut a = RegionSet::single(r(7));
        a.assign(&RegionSet::single(r(9)));
        assert_eq!(a, RegionSet::single(r(9)));
        assert!(!a.contains(r(7)));
    }

    #[test]
    fn empty_set_is_unvisited() {
        let s = RegionSet::new();
        assert!(s.is_empty());
        assert!(!s.is_tie());
        assert_eq!(s.len(), 0);
    }

    proptest! {
        #[test]
        fn order_of_insertion_does_not_matter(mut ids in proptest::collection::vec(0u16..360, 0..8)) {
            let forward: RegionSet = ids.iter().copied().map(RegionId).collect();
            ids.reverse();
            let backward: RegionSet = ids.iter().copied().map(RegionId).collect();
            prop_assert_eq!(forward, backward);
        }
    }
}
