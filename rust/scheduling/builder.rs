use chrono::prelude::*;
use std::io::Write;

use crate::scheduling::{
    show_date_count, show_dates, DateIndex, DateIndexError, IncludedDays, RangeDelete,
    RangeFilter, RangeInsert, WeekdaySelector,
};

/// An owned [`DateIndex`] together with its default payload and weekday selection.
///
/// The builder forwards to the [`RangeInsert`], [`RangeDelete`] and [`RangeFilter`] algorithms
/// using its own [`WeekdaySelector`] for every weekday restriction.
///
/// *Note*: the weekday selection persists across calls. Use
/// [`reset_days_of_week`](DateBuilder::reset_days_of_week) after an insertion if the next one
/// should require a fresh explicit choice.
///
/// # Examples
/// ```rust
/// # use datebuilder::scheduling::{DateBuilder, IncludedDays, ndate};
/// let mut builder = DateBuilder::new(String::new());
/// builder.include_days_of_week(IncludedDays::all()).unwrap();
/// builder.add_dates(&ndate(2025, 1, 1), Some(&ndate(2025, 1, 5))).unwrap();
/// assert_eq!(builder.count(), 5);
/// builder.delete_date(&ndate(2025, 1, 1)).unwrap();
/// assert_eq!(builder.count(), 4);
/// assert!(!builder.find_date(&ndate(2025, 1, 1)));
/// ```
#[derive(Clone, Debug)]
pub struct DateBuilder<P: Clone> {
    index: DateIndex<P>,
    default: P,
    days_of_week: WeekdaySelector,
}

impl<P: Clone> DateBuilder<P> {
    /// Create a builder over an empty index.
    pub fn new(default: P) -> Self {
        DateBuilder::with_index(DateIndex::new(), default)
    }

    /// Create a builder over an existing index.
    pub fn with_index(index: DateIndex<P>, default: P) -> Self {
        DateBuilder {
            index,
            default,
            days_of_week: WeekdaySelector::new(),
        }
    }

    pub fn index(&self) -> &DateIndex<P> {
        &self.index
    }

    pub fn into_index(self) -> DateIndex<P> {
        self.index
    }

    pub fn days_of_week(&self) -> &WeekdaySelector {
        &self.days_of_week
    }

    /// Replace the index with an empty one, returning the previous index.
    pub fn new_date_index(&mut self) -> DateIndex<P> {
        std::mem::take(&mut self.index)
    }

    /// Replace the weekday selection. See [`WeekdaySelector::set_included`].
    pub fn include_days_of_week(&mut self, flags: IncludedDays) -> Result<&mut Self, DateIndexError> {
        self.days_of_week.set_included(flags)?;
        Ok(self)
    }

    /// Clear the weekday selection.
    pub fn reset_days_of_week(&mut self) -> &mut Self {
        self.days_of_week.clear();
        self
    }

    pub fn count(&self) -> usize {
        self.index.count()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns whether `date` is in the index.
    pub fn find_date(&self, date: &NaiveDate) -> bool {
        self.index.contains(date)
    }

    /// Add the selected weekdays of `[first, last]`, each with a clone of the default payload.
    pub fn add_dates(
        &mut self,
        first: &NaiveDate,
        last: Option<&NaiveDate>,
    ) -> Result<&DateIndex<P>, DateIndexError> {
        self.index
            .insert_range(first, last, &self.days_of_week, None, &self.default)?;
        Ok(&self.index)
    }

    /// Add the selected weekdays of `[first, last]`, each with a clone of `unique`.
    pub fn add_dates_with(
        &mut self,
        first: &NaiveDate,
        last: Option<&NaiveDate>,
        unique: &P,
    ) -> Result<&DateIndex<P>, DateIndexError> {
        self.index
            .insert_range(first, last, &self.days_of_week, Some(unique), &self.default)?;
        Ok(&self.index)
    }

    pub fn delete_date(&mut self, date: &NaiveDate) -> Result<&DateIndex<P>, DateIndexError> {
        self.index.delete_one(date)?;
        Ok(&self.index)
    }

    /// Remove the dates before `before`; only the selected weekdays when `by_day`.
    pub fn delete_before(
        &mut self,
        before: &NaiveDate,
        by_day: bool,
    ) -> Result<&DateIndex<P>, DateIndexError> {
        let by_weekday = Self::weekday_restriction(&self.days_of_week, by_day)?;
        self.index.delete_before(before, by_weekday)?;
        Ok(&self.index)
    }

    /// Remove the dates after `after`; only the selected weekdays when `by_day`.
    pub fn delete_after(
        &mut self,
        after: &NaiveDate,
        by_day: bool,
    ) -> Result<&DateIndex<P>, DateIndexError> {
        let by_weekday = Self::weekday_restriction(&self.days_of_week, by_day)?;
        self.index.delete_after(after, by_weekday)?;
        Ok(&self.index)
    }

    /// Remove the dates strictly between `first` and `last`; only the selected weekdays when
    /// `by_day`.
    pub fn delete_between(
        &mut self,
        first: &NaiveDate,
        last: &NaiveDate,
        by_day: bool,
    ) -> Result<&DateIndex<P>, DateIndexError> {
        let by_weekday = Self::weekday_restriction(&self.days_of_week, by_day)?;
        self.index.delete_between(first, last, by_weekday)?;
        Ok(&self.index)
    }

    /// Return a new index of the dates matching the given day, month and year and the weekday
    /// selection.
    pub fn filter_dates(
        &self,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> DateIndex<P> {
        self.index
            .filter_by_scalar(day, month, year, &self.days_of_week)
    }

    /// Return a new index of the dates matching any of the given days, months and years and the
    /// weekday selection.
    pub fn filtered_date_range(
        &self,
        days: Option<&[u32]>,
        months: Option<&[u32]>,
        years: Option<&[i32]>,
    ) -> DateIndex<P> {
        self.index
            .filter_by_range(years, months, days, &self.days_of_week)
    }

    /// Write the dates of the index to `out`, failing if it is empty.
    pub fn show_dates<W: Write>(&self, out: &mut W) -> Result<(), DateIndexError> {
        show_dates(&self.index, out, true)
    }

    pub fn show_date_count<W: Write>(&self, out: &mut W) -> Result<(), DateIndexError> {
        show_date_count(&self.index, out)
    }

    /// The selector to restrict a delete by, requiring a non-empty selection when `by_day`.
    ///
    /// Without this check an empty selection would leave the delete unrestricted.
    fn weekday_restriction(
        days_of_week: &WeekdaySelector,
        by_day: bool,
    ) -> Result<Option<&WeekdaySelector>, DateIndexError> {
        if !by_day {
            Ok(None)
        } else if days_of_week.is_empty() {
            Err(DateIndexError::EmptySelection)
        } else {
            Ok(Some(days_of_week))
        }
    }
}
