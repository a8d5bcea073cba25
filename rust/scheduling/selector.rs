use chrono::prelude::*;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::scheduling::DateIndexError;

/// The flags of a single weekday configuration call.
///
/// Individual weekdays may be combined freely, but `include_all` and `exclude_all` must each be
/// given alone. Missing fields deserialize as `false`, so a configuration file need only name
/// the days it selects.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncludedDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub include_all: bool,
    pub exclude_all: bool,
}

impl IncludedDays {
    /// Flags selecting every day of the week.
    pub fn all() -> Self {
        IncludedDays {
            include_all: true,
            ..Default::default()
        }
    }

    /// Flags clearing the selection.
    pub fn none() -> Self {
        IncludedDays {
            exclude_all: true,
            ..Default::default()
        }
    }

    /// Flags selecting exactly the given weekdays.
    ///
    /// # Examples
    /// ```rust
    /// # use datebuilder::scheduling::IncludedDays;
    /// # use chrono::Weekday;
    /// let flags = IncludedDays::days(&[Weekday::Mon, Weekday::Wed]);
    /// assert!(flags.monday && flags.wednesday && !flags.tuesday);
    /// ```
    pub fn days(weekdays: &[Weekday]) -> Self {
        let mut flags = IncludedDays::default();
        for day in weekdays {
            match day {
                Weekday::Mon => flags.monday = true,
                Weekday::Tue => flags.tuesday = true,
                Weekday::Wed => flags.wednesday = true,
                Weekday::Thu => flags.thursday = true,
                Weekday::Fri => flags.friday = true,
                Weekday::Sat => flags.saturday = true,
                Weekday::Sun => flags.sunday = true,
            }
        }
        flags
    }

    /// The individual weekday flags indexed 0=Mon,.., 6=Sun.
    fn day_flags(&self) -> [bool; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }

    /// Check the mutual exclusion rules of the flags.
    fn validate(&self) -> Result<(), DateIndexError> {
        let any_day = self.day_flags().iter().any(|f| *f);
        if self.include_all && self.exclude_all {
            Err(DateIndexError::ConfigurationConflict {
                reason: "cannot mark both include_all and exclude_all",
            })
        } else if self.include_all && any_day {
            Err(DateIndexError::ConfigurationConflict {
                reason: "cannot mark both include_all and a specific day, mark only include_all",
            })
        } else if self.exclude_all && any_day {
            Err(DateIndexError::ConfigurationConflict {
                reason: "cannot mark both exclude_all and a specific day, mark only exclude_all",
            })
        } else {
            Ok(())
        }
    }
}

/// The set of weekdays that participate in a bulk operation.
///
/// An empty selector means *nothing qualifies* for a range insertion but *no restriction* for a
/// range filter or a range delete. The selector is a plain value: callers own it and pass it to
/// each operation explicitly.
///
/// # Examples
/// ```rust
/// # use datebuilder::scheduling::{WeekdaySelector, IncludedDays};
/// let mut selector = WeekdaySelector::new();
/// selector.set_included(IncludedDays { monday: true, friday: true, ..Default::default() }).unwrap();
/// assert_eq!(selector.included_weekdays(), vec![0, 4]);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekdaySelector {
    pub(crate) included: HashSet<Weekday>,
}

impl WeekdaySelector {
    /// Create an empty selector.
    pub fn new() -> Self {
        WeekdaySelector::default()
    }

    /// Create a selector including every day of the week.
    pub fn all() -> Self {
        WeekdaySelector {
            included: HashSet::from_iter(
                (0..7_u8).filter_map(|v| Weekday::try_from(v).ok()),
            ),
        }
    }

    /// Create a selector from weekday numbers (0=Mon,.., 6=Sun).
    ///
    /// Duplicates are ignored. Fails with [`DateIndexError::InvalidWeekday`] for values above 6.
    pub fn from_weekdays<I>(weekdays: I) -> Result<Self, DateIndexError>
    where
        I: IntoIterator<Item = u8>,
    {
        let included = weekdays
            .into_iter()
            .map(|v| Weekday::try_from(v).map_err(|_| DateIndexError::InvalidWeekday { weekday: v }))
            .collect::<Result<HashSet<Weekday>, _>>()?;
        Ok(WeekdaySelector { included })
    }

    /// Replace the current selection according to `flags`.
    ///
    /// Fails with [`DateIndexError::ConfigurationConflict`] when `include_all` and `exclude_all`
    /// are both set, or either is set together with an individual weekday. The selection is left
    /// unchanged on failure.
    pub fn set_included(&mut self, flags: IncludedDays) -> Result<&mut Self, DateIndexError> {
        flags.validate()?;
        if flags.include_all {
            *self = WeekdaySelector::all();
        } else if flags.exclude_all {
            self.included.clear();
        } else {
            self.included = flags
                .day_flags()
                .iter()
                .zip(0_u8..)
                .filter(|(flag, _)| **flag)
                .filter_map(|(_, v)| Weekday::try_from(v).ok())
                .collect();
        }
        Ok(self)
    }

    /// Return the included weekday numbers in ascending order.
    pub fn included_weekdays(&self) -> Vec<u8> {
        let mut days: Vec<u8> = self
            .included
            .iter()
            .map(|d| d.num_days_from_monday() as u8)
            .collect();
        days.sort_unstable();
        days
    }

    /// Returns whether the weekday is included.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.included.contains(&weekday)
    }

    /// Returns whether the weekday of `date` is included.
    pub fn includes_date(&self, date: &NaiveDate) -> bool {
        self.included.contains(&date.weekday())
    }

    /// Returns whether `date` passes the selector when an empty selector means no restriction.
    pub(crate) fn admits(&self, date: &NaiveDate) -> bool {
        self.is_empty() || self.includes_date(date)
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    /// Remove every weekday from the selection.
    pub fn clear(&mut self) {
        self.included.clear();
    }
}

impl std::fmt::Display for WeekdaySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .included_weekdays()
            .into_iter()
            .filter_map(|v| Weekday::try_from(v).ok())
            .map(|d| d.to_string())
            .collect();
        write!(f, "[{}]", names.join(", "))
    }
}
