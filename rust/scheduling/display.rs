use itertools::Itertools;
use std::io::Write;

use crate::scheduling::{DateIndex, DateIndexError};

/// Return the dates of the index in ascending order, one ISO 8601 date per line.
pub fn format_dates<P>(index: &DateIndex<P>) -> String {
    index.keys().join("\n")
}

/// Write every date of the index to `out` in ascending order, one per line.
///
/// Fails with [`DateIndexError::EmptyIndex`] when the index is empty and `fail_if_empty` is set,
/// otherwise an empty index writes nothing.
///
/// # Examples
/// ```rust
/// # use datebuilder::scheduling::{DateIndex, show_dates, ndate};
/// let index = DateIndex::from_iter([(ndate(2025, 1, 2), ()), (ndate(2025, 1, 1), ())]);
/// let mut out = Vec::new();
/// show_dates(&index, &mut out, true).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2025-01-01\n2025-01-02\n");
/// ```
pub fn show_dates<P, W: Write>(
    index: &DateIndex<P>,
    out: &mut W,
    fail_if_empty: bool,
) -> Result<(), DateIndexError> {
    if index.is_empty() {
        return if fail_if_empty {
            Err(DateIndexError::EmptyIndex)
        } else {
            Ok(())
        };
    }
    for date in index.keys() {
        writeln!(out, "{}", date)?;
    }
    Ok(())
}

/// Write the number of dates in the index to `out`.
pub fn show_date_count<P, W: Write>(index: &DateIndex<P>, out: &mut W) -> Result<(), DateIndexError> {
    writeln!(out, "{}", index.count())?;
    Ok(())
}
