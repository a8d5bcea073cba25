use chrono::prelude::*;
use tracing::{debug, trace};

use crate::scheduling::{DateIndexError, DateStore, WeekdaySelector};

/// Point and range deletion of dates, optionally restricted by weekday.
///
/// Every boundary date is checked against the current contents before anything is removed, so
/// a failed call leaves the store untouched. All range variants exclude their boundary dates.
///
/// A `by_weekday` selector that is `None` or empty places no restriction on which dates in the
/// range are removed.
pub trait RangeDelete<P>: DateStore<P> {
    /// Remove a single date.
    ///
    /// Fails with [`DateIndexError::NotFound`] if `date` is absent, including from an empty store.
    fn delete_one(&mut self, date: &NaiveDate) -> Result<&mut Self, DateIndexError> {
        self.remove(date)?;
        debug!(date = %date, "deleted date");
        Ok(self)
    }

    /// Remove every date strictly before `before`.
    ///
    /// Fails with [`DateIndexError::NotFound`] if `before` is absent.
    fn delete_before(
        &mut self,
        before: &NaiveDate,
        by_weekday: Option<&WeekdaySelector>,
    ) -> Result<&mut Self, DateIndexError> {
        self.require_date(before)?;
        let start = self.min_key();
        let removed = self.remove_walk(start, |d| d < before, by_weekday);
        debug!(before = %before, removed, "deleted dates before");
        Ok(self)
    }

    /// Remove every date strictly after `after`.
    ///
    /// Fails with [`DateIndexError::NotFound`] if `after` is absent.
    fn delete_after(
        &mut self,
        after: &NaiveDate,
        by_weekday: Option<&WeekdaySelector>,
    ) -> Result<&mut Self, DateIndexError> {
        self.require_date(after)?;
        let start = self.successor(after);
        let removed = self.remove_walk(start, |_| true, by_weekday);
        debug!(after = %after, removed, "deleted dates after");
        Ok(self)
    }

    /// Remove every date strictly between `first` and `last`; the boundary dates are kept.
    ///
    /// Fails with [`DateIndexError::NotFound`] if either boundary is absent and with
    /// [`DateIndexError::InvalidRange`] if `last` precedes `first`.
    ///
    /// # Examples
    /// ```rust
    /// # use datebuilder::scheduling::{DateIndex, RangeDelete, cal_date_range, ndate};
    /// let mut index: DateIndex<()> = cal_date_range(&ndate(2025, 1, 1), &ndate(2025, 1, 5))
    ///     .into_iter()
    ///     .map(|d| (d, ()))
    ///     .collect();
    /// index.delete_between(&ndate(2025, 1, 1), &ndate(2025, 1, 4), None).unwrap();
    /// assert_eq!(
    ///     index.keys().collect::<Vec<_>>(),
    ///     vec![ndate(2025, 1, 1), ndate(2025, 1, 4), ndate(2025, 1, 5)]
    /// );
    /// ```
    fn delete_between(
        &mut self,
        first: &NaiveDate,
        last: &NaiveDate,
        by_weekday: Option<&WeekdaySelector>,
    ) -> Result<&mut Self, DateIndexError> {
        if last < first {
            return Err(DateIndexError::InvalidRange {
                first: *first,
                last: *last,
            });
        }
        self.require_date(first)?;
        self.require_date(last)?;
        let start = self.successor(first);
        let removed = self.remove_walk(start, |d| d < last, by_weekday);
        debug!(first = %first, last = %last, removed, "deleted dates between");
        Ok(self)
    }

    /// Fail with [`DateIndexError::NotFound`] unless `date` is currently stored.
    fn require_date(&self, date: &NaiveDate) -> Result<(), DateIndexError> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(DateIndexError::NotFound { date: *date })
        }
    }

    /// Walk ascending from `start` while `within` holds, removing dates admitted by `by_weekday`.
    ///
    /// The successor of each date is captured before that date is removed. A date that has
    /// already gone is skipped. Returns the number of dates removed.
    fn remove_walk<F>(
        &mut self,
        start: Option<NaiveDate>,
        within: F,
        by_weekday: Option<&WeekdaySelector>,
    ) -> usize
    where
        F: Fn(&NaiveDate) -> bool,
    {
        let mut removed: usize = 0;
        let mut current = start;
        while let Some(date) = current {
            if !within(&date) {
                break;
            }
            let next = self.successor(&date);
            if by_weekday.map_or(true, |s| s.admits(&date)) {
                match self.remove(&date) {
                    Ok(_) => {
                        trace!(date = %date, "delete date");
                        removed += 1;
                    }
                    Err(_) => trace!(date = %date, "date already removed"),
                }
            }
            current = next;
        }
        removed
    }
}

impl<P> RangeDelete<P> for crate::scheduling::DateIndex<P> {}
