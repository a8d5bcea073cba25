use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use crate::scheduling::DateIndexError;

/// Point access to an ordered store of dates mapped to payloads.
///
/// This is the primitive interface the range algorithms in [`RangeInsert`](crate::scheduling::RangeInsert),
/// [`RangeDelete`](crate::scheduling::RangeDelete) and [`RangeFilter`](crate::scheduling::RangeFilter)
/// are written against.
pub trait DateStore<P> {
    /// Insert `value` under `date`, returning any payload it replaced.
    fn insert(&mut self, date: NaiveDate, value: P) -> Option<P>;

    /// Remove `date`, returning its payload, or [`DateIndexError::NotFound`] if absent.
    fn remove(&mut self, date: &NaiveDate) -> Result<P, DateIndexError>;

    /// Returns whether `date` is a key of the store.
    fn contains(&self, date: &NaiveDate) -> bool;

    /// Return the payload stored under `date`.
    fn get(&self, date: &NaiveDate) -> Option<&P>;

    /// Return the smallest key, or `None` if empty.
    fn min_key(&self) -> Option<NaiveDate>;

    /// Return the smallest key strictly greater than `date`, whether or not `date` is present.
    fn successor(&self, date: &NaiveDate) -> Option<NaiveDate>;

    /// Return the number of keys.
    fn count(&self) -> usize;
}

/// An ordered index of unique dates, each mapped to a payload.
///
/// Keys are always iterated in ascending date order. Inserting an existing date overwrites its
/// payload. The index is not internally synchronised; mutation requires `&mut` access so sharing
/// between threads needs an external lock.
///
/// # Examples
/// ```rust
/// # use datebuilder::scheduling::{DateIndex, ndate};
/// let mut index = DateIndex::new();
/// index.insert(ndate(2025, 1, 3), "c");
/// index.insert(ndate(2025, 1, 1), "a");
/// assert_eq!(index.min_key(), Some(ndate(2025, 1, 1)));
/// assert_eq!(index.successor(&ndate(2025, 1, 2)), Some(ndate(2025, 1, 3)));
/// assert_eq!(index.successor(&ndate(2025, 1, 3)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateIndex<P> {
    pub(crate) entries: BTreeMap<NaiveDate, P>,
}

impl<P> Default for DateIndex<P> {
    fn default() -> Self {
        DateIndex {
            entries: BTreeMap::new(),
        }
    }
}

impl<P> DateIndex<P> {
    /// Create an empty index.
    pub fn new() -> Self {
        DateIndex::default()
    }

    /// Insert `value` under `date`, overwriting and returning any previous payload.
    pub fn insert(&mut self, date: NaiveDate, value: P) -> Option<P> {
        self.entries.insert(date, value)
    }

    /// Remove `date` from the index.
    ///
    /// Fails with [`DateIndexError::NotFound`] if `date` is absent.
    pub fn remove(&mut self, date: &NaiveDate) -> Result<P, DateIndexError> {
        self.entries
            .remove(date)
            .ok_or(DateIndexError::NotFound { date: *date })
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.entries.contains_key(date)
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&P> {
        self.entries.get(date)
    }

    /// Return a mutable reference to the payload of `date`.
    pub fn get_mut(&mut self, date: &NaiveDate) -> Option<&mut P> {
        self.entries.get_mut(date)
    }

    pub fn min_key(&self) -> Option<NaiveDate> {
        self.entries.keys().next().copied()
    }

    pub fn max_key(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }

    /// Return the nearest key strictly greater than `date`.
    pub fn successor(&self, date: &NaiveDate) -> Option<NaiveDate> {
        self.entries
            .range((Excluded(*date), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    /// Return the nearest key strictly less than `date`.
    pub fn predecessor(&self, date: &NaiveDate) -> Option<NaiveDate> {
        self.entries
            .range((Unbounded, Excluded(*date)))
            .next_back()
            .map(|(k, _)| *k)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate `(date, payload)` pairs in ascending date order.
    ///
    /// The iterator borrows the index, so it may be dropped at any point and a fresh one
    /// started again from the smallest key.
    pub fn entries_ascending(&self) -> btree_map::Iter<'_, NaiveDate, P> {
        self.entries.iter()
    }

    /// Iterate the dates in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }
}

impl<P> DateStore<P> for DateIndex<P> {
    fn insert(&mut self, date: NaiveDate, value: P) -> Option<P> {
        DateIndex::insert(self, date, value)
    }

    fn remove(&mut self, date: &NaiveDate) -> Result<P, DateIndexError> {
        DateIndex::remove(self, date)
    }

    fn contains(&self, date: &NaiveDate) -> bool {
        DateIndex::contains(self, date)
    }

    fn get(&self, date: &NaiveDate) -> Option<&P> {
        DateIndex::get(self, date)
    }

    fn min_key(&self) -> Option<NaiveDate> {
        DateIndex::min_key(self)
    }

    fn successor(&self, date: &NaiveDate) -> Option<NaiveDate> {
        DateIndex::successor(self, date)
    }

    fn count(&self) -> usize {
        DateIndex::count(self)
    }
}

impl<P> FromIterator<(NaiveDate, P)> for DateIndex<P> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, P)>>(iter: I) -> Self {
        DateIndex {
            entries: BTreeMap::from_iter(iter),
        }
    }
}

impl<P> IntoIterator for DateIndex<P> {
    type Item = (NaiveDate, P);
    type IntoIter = btree_map::IntoIter<NaiveDate, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a DateIndex<P> {
    type Item = (&'a NaiveDate, &'a P);
    type IntoIter = btree_map::Iter<'a, NaiveDate, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndate;

    fn fixture_index() -> DateIndex<u32> {
        // 3rd, 5th and 9th of January
        DateIndex::from_iter([
            (ndate(2025, 1, 5), 5),
            (ndate(2025, 1, 3), 3),
            (ndate(2025, 1, 9), 9),
        ])
    }

    #[test]
    fn test_insert_overwrites() {
        let mut index = fixture_index();
        let previous = index.insert(ndate(2025, 1, 5), 50);
        assert_eq!(previous, Some(5));
        assert_eq!(index.get(&ndate(2025, 1, 5)), Some(&50));
        assert_eq!(index.count(), 3);
    }

    #[test]
    fn test_remove() {
        let mut index = fixture_index();
        assert_eq!(index.remove(&ndate(2025, 1, 3)).unwrap(), 3);
        assert!(!index.contains(&ndate(2025, 1, 3)));
        assert!(matches!(
            index.remove(&ndate(2025, 1, 3)),
            Err(DateIndexError::NotFound { .. })
        ));
        assert_eq!(index.count(), 2);
    }

    #[test]
    fn test_min_max_key() {
        let index = fixture_index();
        assert_eq!(index.min_key(), Some(ndate(2025, 1, 3)));
        assert_eq!(index.max_key(), Some(ndate(2025, 1, 9)));
        let empty: DateIndex<u32> = DateIndex::new();
        assert_eq!(empty.min_key(), None);
        assert_eq!(empty.max_key(), None);
    }

    #[test]
    fn test_successor_nearest_greater() {
        let index = fixture_index();
        assert_eq!(index.successor(&ndate(2025, 1, 3)), Some(ndate(2025, 1, 5)));
        assert_eq!(index.successor(&ndate(2025, 1, 4)), Some(ndate(2025, 1, 5)));
        assert_eq!(index.successor(&ndate(2024, 1, 1)), Some(ndate(2025, 1, 3)));
        assert_eq!(index.successor(&ndate(2025, 1, 9)), None);
        let empty: DateIndex<u32> = DateIndex::new();
        assert_eq!(empty.successor(&ndate(2025, 1, 1)), None);
    }

    #[test]
    fn test_predecessor_nearest_lower() {
        let index = fixture_index();
        assert_eq!(index.predecessor(&ndate(2025, 1, 9)), Some(ndate(2025, 1, 5)));
        assert_eq!(index.predecessor(&ndate(2025, 1, 6)), Some(ndate(2025, 1, 5)));
        assert_eq!(index.predecessor(&ndate(2025, 1, 3)), None);
    }

    #[test]
    fn test_entries_ascending_restartable() {
        let index = fixture_index();
        let first: Vec<_> = index.entries_ascending().take(1).collect();
        assert_eq!(first, vec![(&ndate(2025, 1, 3), &3)]);
        let all: Vec<u32> = index.entries_ascending().map(|(_, v)| *v).collect();
        assert_eq!(all, vec![3, 5, 9]);
    }

    #[test]
    fn test_keys_and_clear() {
        let mut index = fixture_index();
        assert_eq!(
            index.keys().collect::<Vec<_>>(),
            vec![ndate(2025, 1, 3), ndate(2025, 1, 5), ndate(2025, 1, 9)]
        );
        index.clear();
        assert!(index.is_empty());
    }

    #[test]
    fn test_get_mut() {
        let mut index = fixture_index();
        if let Some(v) = index.get_mut(&ndate(2025, 1, 9)) {
            *v += 1;
        }
        assert_eq!(index.get(&ndate(2025, 1, 9)), Some(&10));
    }

    #[test]
    fn test_store_trait_walk() {
        fn walk<S: DateStore<u32>>(store: &S) -> Vec<NaiveDate> {
            let mut out = vec![];
            let mut current = store.min_key();
            while let Some(date) = current {
                out.push(date);
                current = store.successor(&date);
            }
            out
        }
        let index = fixture_index();
        assert_eq!(walk(&index), index.keys().collect::<Vec<_>>());
    }
}
