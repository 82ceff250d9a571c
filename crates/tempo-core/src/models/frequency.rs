//! Frequency and item-kind enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the two item kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A one-off goal scheduled on explicit calendar dates
    Goal,

    /// A recurring routine scheduled by a frequency-relative offset
    Routine,
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "goal" => Ok(ItemKind::Goal),
            "routine" => Ok(ItemKind::Routine),
            _ => Err(format!("Invalid item type: {s}")),
        }
    }
}

impl ItemKind {
    /// Convert to the on-disk string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Goal => "goal",
            ItemKind::Routine => "routine",
        }
    }
}

/// Type-safe enumeration of routine recurrence frequencies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Recurs every day; the only legal offset is 0
    Day,

    /// Recurs weekly; offsets are weekday ordinals (Monday = 0)
    Week,

    /// Recurs monthly; offsets are zero-based days of the month.
    /// Days 29-31 are never matchable, so offsets stop at 27.
    Month,

    /// Recurs yearly; offsets are zero-based days of the year.
    /// The leap-day tail beyond 364 is unreachable.
    Year,
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Frequency::Day),
            "week" => Ok(Frequency::Week),
            "month" => Ok(Frequency::Month),
            "year" => Ok(Frequency::Year),
            _ => Err(format!("Invalid frequency: {s}")),
        }
    }
}

impl Frequency {
    /// Convert to the on-disk string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Day => "day",
            Frequency::Week => "week",
            Frequency::Month => "month",
            Frequency::Year => "year",
        }
    }

    /// The largest offset a schedule entry may carry for this frequency.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tempo_core::models::Frequency;
    ///
    /// assert_eq!(Frequency::Day.max_offset(), 0);
    /// assert_eq!(Frequency::Week.max_offset(), 6);
    /// assert_eq!(Frequency::Month.max_offset(), 27);
    /// assert_eq!(Frequency::Year.max_offset(), 364);
    /// ```
    pub fn max_offset(&self) -> i64 {
        match self {
            Frequency::Day => 0,
            Frequency::Week => 6,
            Frequency::Month => 27,
            Frequency::Year => 364,
        }
    }

    /// Whether an offset lies in this frequency's legal range.
    pub fn contains_offset(&self, offset: i64) -> bool {
        (0..=self.max_offset()).contains(&offset)
    }
}
