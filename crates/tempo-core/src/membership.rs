//! Date-membership engine.
//!
//! Decides whether a calendar date falls within an item's schedule. Goal
//! schedules match by exact date equality; routine schedules match by
//! comparing the date's calendar ordinal - weekday, day-of-month, or
//! day-of-year, per the routine's frequency - against the schedule's
//! offsets. A `day` routine matches every date.

use jiff::civil::Date;

use crate::{
    calendar::{day_of_month_ordinal, day_of_year_ordinal, weekday_of},
    compat::routine_compatible,
    error::{Result, TrackerError},
    models::{Collection, Frequency, GoalSpec, Item, RoutineSpec, Schedule},
};

/// Whether some goal entry is dated exactly on `date`.
///
/// This is exact-match, not range-match: an entry on the day before or
/// after does not count.
pub fn date_in_gschedule(gschedule: &[GoalSpec], date: Date) -> bool {
    gschedule.iter().any(|spec| spec.date() == date)
}

/// Whether `date` falls on the routine's schedule.
///
/// # Errors
///
/// Returns `TrackerError::InvalidInput` when the schedule is not valid for
/// the frequency; membership is only defined over compatible schedules.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use tempo_core::membership::date_in_rschedule;
/// use tempo_core::models::{Frequency, RoutineSpec};
///
/// // Offset 0 is Monday; 2024-03-04 was a Monday.
/// let schedule = [RoutineSpec(0, 60)];
/// assert!(date_in_rschedule(Frequency::Week, &schedule, date(2024, 3, 4)).unwrap());
/// assert!(!date_in_rschedule(Frequency::Week, &schedule, date(2024, 3, 5)).unwrap());
/// ```
pub fn date_in_rschedule(frequency: Frequency, rschedule: &[RoutineSpec], date: Date) -> Result<bool> {
    if !routine_compatible(rschedule, frequency) {
        return Err(TrackerError::invalid_input(
            "rschedule",
            format!("schedule is not valid for frequency '{}'", frequency.as_str()),
        ));
    }

    Ok(match frequency {
        Frequency::Day => true,
        Frequency::Week => {
            let ordinal = i64::from(weekday_of(date));
            rschedule.iter().any(|spec| spec.offset() == ordinal)
        }
        Frequency::Month => {
            let ordinal = i64::from(day_of_month_ordinal(date));
            rschedule.iter().any(|spec| spec.offset() == ordinal)
        }
        Frequency::Year => {
            let ordinal = i64::from(day_of_year_ordinal(date));
            rschedule.iter().any(|spec| spec.offset() == ordinal)
        }
    })
}

/// Whether an item's schedule covers `date`, dispatching on its kind.
pub fn item_matches_date(item: &Item, date: Date) -> Result<bool> {
    match &item.schedule {
        Schedule::Goal { gschedule, .. } => Ok(date_in_gschedule(gschedule, date)),
        Schedule::Routine {
            frequency,
            rschedule,
        } => date_in_rschedule(*frequency, rschedule, date),
    }
}

/// Filters a collection down to the items scheduled on `date`, preserving
/// collection order.
///
/// The `active` flag is advisory metadata, not a scheduling gate, so
/// inactive items match by default; pass `include_inactive = false` to
/// filter them out.
///
/// # Errors
///
/// * `TrackerError::InvalidCollection` and item-level errors - the
///   collection fails validation before the query runs
pub fn items_on_date(collection: &Collection, date: Date, include_inactive: bool) -> Result<Vec<&Item>> {
    collection.validate()?;

    let mut matched = Vec::new();
    for item in &collection.items {
        if !include_inactive && !item.active {
            continue;
        }
        if item_matches_date(item, date)? {
            matched.push(item);
        }
    }
    Ok(matched)
}
