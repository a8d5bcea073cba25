use chrono::prelude::*;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scheduling::{DateIndex, DateStore, WeekdaySelector};

/// Returns whether `value` passes a criterion, where an unset or empty criterion passes all.
fn criterion_admits<T: PartialEq>(criterion: Option<&[T]>, value: T) -> bool {
    criterion.map_or(true, |c| c.is_empty() || c.contains(&value))
}

/// Extraction of the dates matching year, month, day-of-month and weekday criteria into a new
/// [`DateIndex`].
///
/// The source is only read. The result owns clones of the matching payloads, so later changes
/// to either index do not affect the other's set of dates.
pub trait RangeFilter<P: Clone>: DateStore<P> {
    /// Return a new index of every date that satisfies all of the criteria.
    ///
    /// Each of `years`, `months` and `days` (day of the month) is ignored when `None` or empty,
    /// otherwise the date's component must be one of its values. An empty `selector` places no
    /// restriction on weekday.
    ///
    /// # Examples
    /// ```rust
    /// # use datebuilder::scheduling::{DateIndex, RangeFilter, WeekdaySelector, cal_date_range, ndate};
    /// let index: DateIndex<()> = cal_date_range(&ndate(2024, 12, 1), &ndate(2025, 1, 1))
    ///     .into_iter()
    ///     .map(|d| (d, ()))
    ///     .collect();
    /// let none = WeekdaySelector::new();
    /// assert_eq!(index.filter_by_range(Some(&[2025]), None, None, &none).count(), 1);
    /// assert_eq!(index.filter_by_range(Some(&[2024]), None, None, &none).count(), 31);
    /// ```
    fn filter_by_range(
        &self,
        years: Option<&[i32]>,
        months: Option<&[u32]>,
        days: Option<&[u32]>,
        selector: &WeekdaySelector,
    ) -> DateIndex<P> {
        let mut filtered: DateIndex<P> = DateIndex::new();
        let mut visited: usize = 0;
        let mut current = self.min_key();
        while let Some(date) = current {
            visited += 1;
            if criterion_admits(years, date.year())
                && criterion_admits(months, date.month())
                && criterion_admits(days, date.day())
                && selector.admits(&date)
            {
                if let Some(value) = self.get(&date) {
                    filtered.insert(date, value.clone());
                }
            }
            current = self.successor(&date);
        }
        debug!(
            visited,
            matched = filtered.count(),
            weekdays = %selector,
            "filtered date range"
        );
        filtered
    }

    /// Return a new index of every date matching the given day of month, month and year.
    ///
    /// Each provided value is treated as a single-valued criterion of
    /// [`filter_by_range`](RangeFilter::filter_by_range); omitted values do not restrict.
    fn filter_by_scalar(
        &self,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
        selector: &WeekdaySelector,
    ) -> DateIndex<P> {
        let years: Vec<i32> = year.into_iter().collect();
        let months: Vec<u32> = month.into_iter().collect();
        let days: Vec<u32> = day.into_iter().collect();
        self.filter_by_range(
            Some(years.as_slice()),
            Some(months.as_slice()),
            Some(days.as_slice()),
            selector,
        )
    }
}

impl<P: Clone> RangeFilter<P> for DateIndex<P> {}

/// A stored set of filter criteria.
///
/// Empty sets do not restrict. Values keep the order they were given in, which is the order
/// they serialize in.
///
/// # Examples
/// ```rust
/// # use datebuilder::scheduling::{DateFilter, DateIndex, WeekdaySelector, cal_date_range, ndate};
/// # use datebuilder::json::JSON;
/// let filter = DateFilter::from_json(r#"{"months": [1, 3]}"#).unwrap();
/// let index: DateIndex<()> = cal_date_range(&ndate(2025, 1, 1), &ndate(2025, 3, 31))
///     .into_iter()
///     .map(|d| (d, ()))
///     .collect();
/// assert_eq!(filter.apply(&index, &WeekdaySelector::new()).count(), 62);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFilter {
    pub years: IndexSet<i32>,
    pub months: IndexSet<u32>,
    pub days: IndexSet<u32>,
}

impl DateFilter {
    /// Create a filter with no criteria.
    pub fn new() -> Self {
        DateFilter::default()
    }

    /// Add `year` to the accepted years.
    pub fn year(mut self, year: i32) -> Self {
        self.years.insert(year);
        self
    }

    /// Add `month` (1..=12) to the accepted months.
    pub fn month(mut self, month: u32) -> Self {
        self.months.insert(month);
        self
    }

    /// Add `day` of the month (1..=31) to the accepted days.
    pub fn day(mut self, day: u32) -> Self {
        self.days.insert(day);
        self
    }

    /// Returns whether the filter has no criteria.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.months.is_empty() && self.days.is_empty()
    }

    /// Filter `source` into a new index using these criteria and `selector`.
    pub fn apply<P, S>(&self, source: &S, selector: &WeekdaySelector) -> DateIndex<P>
    where
        P: Clone,
        S: RangeFilter<P>,
    {
        let years: Vec<i32> = self.years.iter().copied().collect();
        let months: Vec<u32> = self.months.iter().copied().collect();
        let days: Vec<u32> = self.days.iter().copied().collect();
        source.filter_by_range(
            Some(years.as_slice()),
            Some(months.as_slice()),
            Some(days.as_slice()),
            selector,
        )
    }
}
