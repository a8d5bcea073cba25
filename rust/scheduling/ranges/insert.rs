use chrono::prelude::*;
use tracing::{debug, trace};

use crate::scheduling::{DateIndexError, DateStore, WeekdaySelector};

/// Bulk insertion of a closed interval of dates, restricted by weekday.
pub trait RangeInsert<P: Clone>: DateStore<P> {
    /// Insert one entry for every date in `[first, last]` whose weekday is in `selector`.
    ///
    /// If `last` is `None` only `first` is considered. Each date receives a clone of `unique`
    /// when given, otherwise a clone of `default`, so every entry owns an independent payload.
    ///
    /// Fails with [`DateIndexError::InvalidRange`] when `last` precedes `first` and with
    /// [`DateIndexError::EmptySelection`] when no weekday is selected. Neither failure mutates
    /// the store.
    ///
    /// *Note*: the selector is not modified. Callers that want every insertion to carry an
    /// explicit weekday choice should clear it after the call.
    ///
    /// # Examples
    /// ```rust
    /// # use datebuilder::scheduling::{DateIndex, RangeInsert, WeekdaySelector, ndate};
    /// let mut index: DateIndex<Vec<String>> = DateIndex::new();
    /// let weekdays = WeekdaySelector::from_weekdays([0, 1, 2, 3, 4]).unwrap();
    /// index.insert_range(&ndate(2025, 1, 1), Some(&ndate(2025, 1, 7)), &weekdays, None, &vec![]).unwrap();
    /// assert_eq!(index.count(), 5); // the weekend of 4th and 5th is skipped
    /// ```
    fn insert_range(
        &mut self,
        first: &NaiveDate,
        last: Option<&NaiveDate>,
        selector: &WeekdaySelector,
        unique: Option<&P>,
        default: &P,
    ) -> Result<&mut Self, DateIndexError> {
        let last = last.unwrap_or(first);
        if last < first {
            return Err(DateIndexError::InvalidRange {
                first: *first,
                last: *last,
            });
        }
        if selector.is_empty() {
            return Err(DateIndexError::EmptySelection);
        }

        let payload = unique.unwrap_or(default);
        let mut inserted: usize = 0;
        let mut current = *first;
        loop {
            if selector.includes_date(&current) {
                trace!(date = %current, "insert date");
                self.insert(current, payload.clone());
                inserted += 1;
            }
            if current >= *last {
                break;
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
        debug!(
            first = %first,
            last = %last,
            weekdays = %selector,
            inserted,
            "inserted date range"
        );
        Ok(self)
    }
}

impl<P: Clone> RangeInsert<P> for crate::scheduling::DateIndex<P> {}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::{cal_date_range, ndate, DateIndex, IncludedDays};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Slot {
        booked: Option<String>,
    }

    fn all_days() -> WeekdaySelector {
        let mut selector = WeekdaySelector::new();
        selector.set_included(IncludedDays::all()).unwrap();
        selector
    }

    #[test]
    fn test_insert_range_all_days() {
        let mut index: DateIndex<Slot> = DateIndex::new();
        let first = ndate(2025, 1, 1);
        let last = ndate(2025, 1, 5);
        index
            .insert_range(&first, Some(&last), &all_days(), None, &Slot::default())
            .unwrap();
        assert_eq!(index.count(), 5);
        assert_eq!(index.keys().collect::<Vec<_>>(), cal_date_range(&first, &last));
    }

    #[test]
    fn test_insert_single_date() {
        let mut index: DateIndex<Slot> = DateIndex::new();
        let first = ndate(2025, 1, 1);
        let result = index
            .insert_range(&first, None, &all_days(), None, &Slot::default())
            .unwrap();
        assert_eq!(result.count(), 1);
        assert_eq!(result.min_key(), Some(first));
    }

    #[test]
    fn test_insert_range_by_weekday() {
        let mut index: DateIndex<u8> = DateIndex::new();
        let mondays = WeekdaySelector::from_weekdays([0]).unwrap();
        index
            .insert_range(
                &ndate(2025, 1, 1),
                Some(&ndate(2025, 1, 31)),
                &mondays,
                None,
                &0,
            )
            .unwrap();
        assert_eq!(
            index.keys().collect::<Vec<_>>(),
            vec![
                ndate(2025, 1, 6),
                ndate(2025, 1, 13),
                ndate(2025, 1, 20),
                ndate(2025, 1, 27)
            ]
        );
    }

    #[test]
    fn test_insert_single_date_not_selected() {
        let mut index: DateIndex<u8> = DateIndex::new();
        let mondays = WeekdaySelector::from_weekdays([0]).unwrap();
        // Wednesday
        index
            .insert_range(&ndate(2025, 1, 1), None, &mondays, None, &0)
            .unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_insert_range_invalid_range() {
        let mut index: DateIndex<u8> = DateIndex::from_iter([(ndate(2024, 1, 1), 1)]);
        let result = index.insert_range(
            &ndate(2025, 1, 2),
            Some(&ndate(2025, 1, 1)),
            &all_days(),
            None,
            &0,
        );
        assert!(matches!(result, Err(DateIndexError::InvalidRange { .. })));
        assert_eq!(index.count(), 1);
    }

    #[test]
    fn test_insert_range_empty_selection() {
        let mut index: DateIndex<u8> = DateIndex::new();
        let result = index.insert_range(
            &ndate(2025, 1, 1),
            Some(&ndate(2025, 1, 5)),
            &WeekdaySelector::new(),
            None,
            &0,
        );
        assert!(matches!(result, Err(DateIndexError::EmptySelection)));
        assert!(index.is_empty());
    }

    #[test]
    fn test_insert_range_unique_payload() {
        let mut index: DateIndex<&str> = DateIndex::new();
        index
            .insert_range(
                &ndate(2025, 1, 1),
                Some(&ndate(2025, 1, 3)),
                &all_days(),
                Some(&"unique"),
                &"default",
            )
            .unwrap();
        assert!(index.entries_ascending().all(|(_, v)| *v == "unique"));
    }

    #[test]
    fn test_insert_range_overwrites_existing() {
        let mut index: DateIndex<&str> = DateIndex::from_iter([(ndate(2025, 1, 2), "old")]);
        index
            .insert_range(
                &ndate(2025, 1, 1),
                Some(&ndate(2025, 1, 3)),
                &all_days(),
                None,
                &"new",
            )
            .unwrap();
        assert_eq!(index.count(), 3);
        assert_eq!(index.get(&ndate(2025, 1, 2)), Some(&"new"));
    }

    #[test]
    fn test_default_payloads_are_independent() {
        let mut index: DateIndex<Slot> = DateIndex::new();
        index
            .insert_range(
                &ndate(2025, 1, 1),
                Some(&ndate(2025, 1, 3)),
                &all_days(),
                None,
                &Slot::default(),
            )
            .unwrap();
        index.get_mut(&ndate(2025, 1, 2)).unwrap().booked = Some("alice".to_string());
        assert_eq!(index.get(&ndate(2025, 1, 1)), Some(&Slot::default()));
        assert_eq!(index.get(&ndate(2025, 1, 3)), Some(&Slot::default()));
    }

    #[test]
    fn test_shared_payload_by_choice() {
        // a payload type that is itself a shared handle clones to the same allocation
        let shared = Rc::new(RefCell::new(0));
        let mut index: DateIndex<Rc<RefCell<i32>>> = DateIndex::new();
        index
            .insert_range(
                &ndate(2025, 1, 1),
                Some(&ndate(2025, 1, 2)),
                &all_days(),
                None,
                &shared,
            )
            .unwrap();
        *index.get(&ndate(2025, 1, 1)).unwrap().borrow_mut() += 1;
        assert_eq!(*shared.borrow(), 1);
    }

    #[test]
    fn test_insert_range_count_matches_weekday_count() {
        let weekdays = WeekdaySelector::from_weekdays([1, 3, 5]).unwrap();
        let first = ndate(2024, 2, 1);
        let last = ndate(2024, 5, 17);
        let mut index: DateIndex<()> = DateIndex::new();
        index
            .insert_range(&first, Some(&last), &weekdays, None, &())
            .unwrap();
        let expected = cal_date_range(&first, &last)
            .iter()
            .filter(|d| weekdays.includes_date(d))
            .count();
        assert_eq!(index.count(), expected);
        assert!(index.keys().all(|d| weekdays.includes_date(&d)));
    }
}
