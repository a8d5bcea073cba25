//! Error types for date index operations.

use chrono::NaiveDate;

/// Error type for all fallible operations on a [`DateIndex`](crate::scheduling::DateIndex) and
/// its range algorithms.
///
/// Every operation either completes fully or returns one of these variants before any mutation
/// has taken place.
#[derive(Debug, thiserror::Error)]
pub enum DateIndexError {
    /// Returned when a weekday configuration combines mutually exclusive flags.
    #[error("conflicting weekday configuration: {reason}")]
    ConfigurationConflict {
        /// Which combination of flags was rejected.
        reason: &'static str,
    },

    /// Returned when a bulk insertion is attempted with no weekdays selected.
    #[error("no days of the week are included")]
    EmptySelection,

    /// Returned when the upper bound of an interval precedes its lower bound.
    #[error("invalid range: {last} precedes {first}")]
    InvalidRange {
        /// The lower bound that was provided.
        first: NaiveDate,
        /// The upper bound that was provided.
        last: NaiveDate,
    },

    /// Returned when a date required by the operation is not present in the index.
    #[error("date {date} is not found")]
    NotFound {
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// Returned when an operation that requires at least one entry is invoked on an empty index.
    #[error("the date index is empty")]
    EmptyIndex,

    /// Returned when text cannot be parsed as a `MM/DD/YYYY` calendar date.
    #[error("invalid date format: {input:?} (expected MM/DD/YYYY)")]
    InvalidFormat {
        /// The text that was rejected.
        input: String,
    },

    /// Returned when a weekday number is outside 0 (Monday) ..= 6 (Sunday).
    #[error("invalid weekday: {weekday} (must be 0..=6)")]
    InvalidWeekday {
        /// The invalid weekday number that was provided.
        weekday: u8,
    },

    /// Returned when rendering an index to a writer fails.
    #[error("failed to write dates: {0}")]
    Io(#[from] std::io::Error),
}
