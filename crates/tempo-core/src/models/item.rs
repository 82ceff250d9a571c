//! Item model definition and validation.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{duration_in_bounds, Frequency, GoalSpec, ItemKind, RoutineSpec};
use crate::{
    compat::CompatSet,
    error::{Result, TrackerError},
    validate::description_in_bounds,
};

/// The kind-specific half of an item: either a goal's date window and dated
/// schedule, or a routine's frequency and offset schedule.
///
/// The `type` tag and the kind-exclusive field sets of the data file map
/// directly onto the two variants, so a typed item can never carry a
/// wrong-kind field. Records coming from storage are still checked for exact
/// key sets at the raw level (see [`crate::validate`]) before decoding,
/// because serde ignores unknown keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schedule {
    /// One-off goal: dated entries inside a start/deadline window
    Goal {
        start_date: Date,
        deadline: Date,
        gschedule: Vec<GoalSpec>,
    },

    /// Recurring routine: offset entries interpreted against a frequency
    Routine {
        frequency: Frequency,
        rschedule: Vec<RoutineSpec>,
    },
}

impl Schedule {
    /// The item kind this schedule belongs to.
    pub fn kind(&self) -> ItemKind {
        match self {
            Schedule::Goal { .. } => ItemKind::Goal,
            Schedule::Routine { .. } => ItemKind::Routine,
        }
    }
}

/// The atomic schedulable unit: a goal or routine keyed by its description.
///
/// The description acts as the item's identity within a collection; there is
/// no separate numeric id. The `active` flag is purely informational and has
/// no scheduling effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Identity key, 1-15 characters, unique within a collection
    pub description: String,

    /// Advisory flag with no scheduling effect
    pub active: bool,

    /// Kind-specific schedule fields, tagged by `type` on disk
    #[serde(flatten)]
    pub schedule: Schedule,
}

impl Item {
    /// Creates a goal item.
    pub fn goal(
        description: impl Into<String>,
        active: bool,
        start_date: Date,
        deadline: Date,
        gschedule: Vec<GoalSpec>,
    ) -> Self {
        Self {
            description: description.into(),
            active,
            schedule: Schedule::Goal {
                start_date,
                deadline,
                gschedule,
            },
        }
    }

    /// Creates a routine item.
    pub fn routine(
        description: impl Into<String>,
        active: bool,
        frequency: Frequency,
        rschedule: Vec<RoutineSpec>,
    ) -> Self {
        Self {
            description: description.into(),
            active,
            schedule: Schedule::Routine {
                frequency,
                rschedule,
            },
        }
    }

    /// The item's kind.
    pub fn kind(&self) -> ItemKind {
        self.schedule.kind()
    }

    /// Validates the complete item: isolated field validity plus the
    /// kind-specific cross-attribute compatibility rules.
    ///
    /// An item is atomically valid or invalid; there is no partial state.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - description out of bounds, or a
    ///   schedule duration outside `0..=1440`
    /// * `TrackerError::IncompatibleValue` - a goal window with
    ///   `start_date > deadline`, a goal entry outside the window, or a
    ///   routine offset outside the frequency's range
    pub fn validate(&self) -> Result<()> {
        if !description_in_bounds(&self.description) {
            return Err(TrackerError::invalid_input(
                "description",
                "must be 1-15 characters",
            ));
        }

        match &self.schedule {
            Schedule::Goal {
                start_date,
                deadline,
                gschedule,
            } => {
                if let Some(spec) = gschedule.iter().find(|s| !duration_in_bounds(s.duration())) {
                    return Err(TrackerError::invalid_input(
                        "gschedule",
                        format!("duration {} is outside 0..=1440", spec.duration()),
                    ));
                }
                if start_date > deadline {
                    return Err(TrackerError::incompatible(
                        "deadline",
                        format!("deadline {deadline} precedes start date {start_date}"),
                    ));
                }
                if !CompatSet::for_item(self).check() {
                    return Err(TrackerError::incompatible(
                        "gschedule",
                        format!("an entry falls outside {start_date}..={deadline}"),
                    ));
                }
            }
            Schedule::Routine {
                frequency,
                rschedule,
            } => {
                if let Some(spec) = rschedule.iter().find(|s| !duration_in_bounds(s.duration())) {
                    return Err(TrackerError::invalid_input(
                        "rschedule",
                        format!("duration {} is outside 0..=1440", spec.duration()),
                    ));
                }
                if !CompatSet::for_item(self).check() {
                    return Err(TrackerError::incompatible(
                        "rschedule",
                        format!(
                            "an offset falls outside 0..={} for frequency '{}'",
                            frequency.max_offset(),
                            frequency.as_str()
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}
