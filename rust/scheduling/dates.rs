use chrono::prelude::*;
use chrono::Days;

use crate::scheduling::DateIndexError;

/// Create a `NaiveDate` from year, month and day.
///
/// Panics if date values are invalid. Intended for literals in tests and examples; use
/// [`parse_date`] for external input.
pub fn ndate(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Return the weekday number of a date, 0=Mon,.., 6=Sun.
pub fn weekday_number(date: &NaiveDate) -> u8 {
    // num_days_from_monday is always in 0..=6
    date.weekday().num_days_from_monday() as u8
}

/// Parse a date given in the fixed `MM/DD/YYYY` layout.
///
/// The month and day must be exactly two digits and the year exactly four, separated by `/`.
/// Calendar-invalid dates such as `02/30/2025` are rejected.
///
/// # Examples
/// ```rust
/// # use datebuilder::scheduling::{parse_date, ndate};
/// assert_eq!(parse_date("01/31/2025").unwrap(), ndate(2025, 1, 31));
/// assert!(parse_date("1/31/2025").is_err());
/// assert!(parse_date("02/29/2025").is_err());
/// ```
pub fn parse_date(date: &str) -> Result<NaiveDate, DateIndexError> {
    let invalid = || DateIndexError::InvalidFormat {
        input: date.to_string(),
    };
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 2 && *i != 5)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(date, "%m/%d/%Y").map_err(|_| invalid())
}

/// Format a date in the `MM/DD/YYYY` layout accepted by [`parse_date`].
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Return a vector of calendar dates between a start and end, inclusive.
///
/// Returns an empty vector when `end` precedes `start`.
pub fn cal_date_range(start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
    let mut vec = Vec::new();
    let mut sample_date = *start;
    while sample_date <= *end {
        vec.push(sample_date);
        match sample_date.checked_add_days(Days::new(1)) {
            Some(next) => sample_date = next,
            None => break,
        }
    }
    vec
}
