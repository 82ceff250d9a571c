//! Schedule entry types for goals and routines.
//!
//! Entries serialize as the two-element JSON arrays used by the data file:
//! `["2024-03-01", 30]` for a goal entry, `[3, 45]` for a routine entry.
//! Multiple entries with the same position are legal; membership checks only
//! require that some entry matches.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Upper bound on a schedule entry duration, in minutes (one day).
pub const MAX_DURATION_MINUTES: i64 = 24 * 60;

/// Whether a duration lies in the legal `0..=1440` minute range.
pub fn duration_in_bounds(minutes: i64) -> bool {
    (0..=MAX_DURATION_MINUTES).contains(&minutes)
}

/// One goal schedule entry: an absolute calendar date plus planned minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSpec(pub Date, pub i64);

impl GoalSpec {
    /// The entry's calendar date.
    pub fn date(&self) -> Date {
        self.0
    }

    /// The entry's duration in minutes.
    pub fn duration(&self) -> i64 {
        self.1
    }

    /// Parses a goal schedule from its JSON-array text form, e.g.
    /// `[["2024-03-01", 30], ["2024-03-05", 45]]`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the text is not a JSON list
    /// of `[date, minutes]` pairs or a duration is out of range.
    pub fn parse_list(text: &str) -> Result<Vec<GoalSpec>> {
        let entries: Vec<GoalSpec> = serde_json::from_str(text).map_err(|e| {
            TrackerError::invalid_input("gschedule", format!("expected a JSON list of [date, minutes] pairs: {e}"))
        })?;
        if let Some(spec) = entries.iter().find(|spec| !duration_in_bounds(spec.duration())) {
            return Err(TrackerError::invalid_input(
                "gschedule",
                format!("duration {} is outside 0..={MAX_DURATION_MINUTES}", spec.duration()),
            ));
        }
        Ok(entries)
    }
}

/// One routine schedule entry: a frequency-relative offset plus planned
/// minutes. The legal offset range depends on the routine's frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSpec(pub i64, pub i64);

impl RoutineSpec {
    /// The entry's frequency-relative offset.
    pub fn offset(&self) -> i64 {
        self.0
    }

    /// The entry's duration in minutes.
    pub fn duration(&self) -> i64 {
        self.1
    }

    /// Parses a routine schedule from its JSON-array text form, e.g.
    /// `[[0, 60], [3, 45]]`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the text is not a JSON list
    /// of `[offset, minutes]` pairs or a duration is out of range. Offset
    /// range legality is frequency-dependent and checked separately.
    pub fn parse_list(text: &str) -> Result<Vec<RoutineSpec>> {
        let entries: Vec<RoutineSpec> = serde_json::from_str(text).map_err(|e| {
            TrackerError::invalid_input("rschedule", format!("expected a JSON list of [offset, minutes] pairs: {e}"))
        })?;
        if let Some(spec) = entries.iter().find(|spec| !duration_in_bounds(spec.duration())) {
            return Err(TrackerError::invalid_input(
                "rschedule",
                format!("duration {} is outside 0..={MAX_DURATION_MINUTES}", spec.duration()),
            ));
        }
        Ok(entries)
    }
}
