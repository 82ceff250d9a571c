//! Calendar utilities shared by the validators and the membership engine.
//!
//! All ordinals here are zero-based: Monday is weekday 0, the first of a
//! month is day-of-month ordinal 0, and January 1 is day-of-year ordinal 0.
//! Routine schedule offsets are compared directly against these ordinals.

use jiff::civil::Date;

use crate::error::{Result, TrackerError};

/// Returns the weekday ordinal for a date, with Monday = 0 and Sunday = 6.
pub fn weekday_of(date: Date) -> i8 {
    date.weekday().to_monday_zero_offset()
}

/// Returns the zero-based day-of-month ordinal (`0..=30`).
pub fn day_of_month_ordinal(date: Date) -> i8 {
    date.day() - 1
}

/// Returns the zero-based day-of-year ordinal (`0..=365`, Jan 1 = 0).
pub fn day_of_year_ordinal(date: Date) -> i16 {
    date.day_of_year() - 1
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `TrackerError::InvalidInput` when the string does not parse to an
/// existing calendar day (e.g. `2023-02-29`).
pub fn parse_iso_date(value: &str) -> Result<Date> {
    value
        .parse::<Date>()
        .map_err(|e| TrackerError::invalid_input("date", format!("'{value}' is not a valid calendar date: {e}")))
}
