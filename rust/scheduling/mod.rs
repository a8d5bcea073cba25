//! Build an ordered [`DateIndex`] of dates mapped to payloads and manipulate it in bulk by date
//! range and weekday.
//!
//! The purpose of this module is to materialize recurring or irregular date sets, such as
//! schedules and availability calendars, and to edit them with rules like;
//! - insert every Monday and Wednesday between two dates, each with its own copy of a payload.
//! - delete every weekend date before, after or between existing dates.
//! - extract all the 1st days of the month in a given year into a separate index.
//!
//! # Weekday Selection
//!
//! A [`WeekdaySelector`] holds a set of weekdays (0=Mon,.., 6=Sun) and is configured with
//! [`IncludedDays`] flags. It is passed explicitly to each bulk operation. An empty selector is
//! an error for insertion but means *no restriction* for filtering and deletion.
//!
//! # Range Algorithms
//!
//! The [`DateIndex`] implements the [`DateStore`] trait of point operations. The three range
//! algorithms [`RangeInsert`], [`RangeDelete`] and [`RangeFilter`] are written against
//! [`DateStore`] and implemented for [`DateIndex`].
//!
//! ### Example
//! This example inserts the weekdays of the first two weeks of 2025, removes the Wednesdays
//! strictly between the 1st and the 14th, and extracts the Fridays.
//! ```rust
//! # use datebuilder::scheduling::{DateIndex, WeekdaySelector, RangeInsert, RangeDelete, RangeFilter, ndate};
//! let mut index: DateIndex<String> = DateIndex::new();
//! let weekdays = WeekdaySelector::from_weekdays([0, 1, 2, 3, 4]).unwrap();
//! index.insert_range(&ndate(2025, 1, 1), Some(&ndate(2025, 1, 14)), &weekdays, None, &String::new()).unwrap();
//! assert_eq!(index.count(), 10);
//!
//! let wednesdays = WeekdaySelector::from_weekdays([2]).unwrap();
//! index.delete_between(&ndate(2025, 1, 1), &ndate(2025, 1, 14), Some(&wednesdays)).unwrap();
//! assert!(index.contains(&ndate(2025, 1, 1)));
//! assert!(!index.contains(&ndate(2025, 1, 8)));
//!
//! let fridays = WeekdaySelector::from_weekdays([4]).unwrap();
//! let extracted = index.filter_by_range(None, None, None, &fridays);
//! assert_eq!(extracted.keys().collect::<Vec<_>>(), vec![ndate(2025, 1, 3), ndate(2025, 1, 10)]);
//! ```
//!
//! # Builder
//!
//! A [`DateBuilder`] owns an index, a default payload and a selector and exposes the same
//! operations with the selector applied implicitly.
//!
//! # Parsing and Display
//!
//! [`parse_date`] reads the `MM/DD/YYYY` layout and [`show_dates`] writes an index in ascending
//! order. The range algorithms only ever consume validated [`NaiveDate`](chrono::NaiveDate)
//! values.

mod builder;
mod dates;
mod display;
mod error;
mod index;
mod ranges;
mod selector;

mod serde;

pub use crate::scheduling::{
    builder::DateBuilder,
    dates::{cal_date_range, format_date, ndate, parse_date, weekday_number},
    display::{format_dates, show_date_count, show_dates},
    error::DateIndexError,
    index::{DateIndex, DateStore},
    ranges::{DateFilter, RangeDelete, RangeFilter, RangeInsert},
    selector::{IncludedDays, WeekdaySelector},
};
