//! Cross-attribute compatibility rules.
//!
//! Schedule validation is two-stage: the structural checks in
//! [`crate::validate`] are frequency- and window-agnostic, and the rules here
//! decide whether a structurally valid schedule agrees with its sibling
//! attributes - a routine's offsets with its frequency, a goal's entry dates
//! with its start/deadline window. Keeping the stages separate lets a single
//! attribute be edited and re-checked against exactly the siblings it
//! constrains.

use jiff::civil::Date;

use crate::models::{duration_in_bounds, Frequency, GoalSpec, Item, RoutineSpec, Schedule};

/// Whether every routine entry is structurally valid and carries an offset
/// inside the frequency's legal range.
///
/// Returns `false` rather than an error for out-of-range offsets; the caller
/// decides how to surface the failure.
///
/// # Examples
///
/// ```rust
/// use tempo_core::compat::routine_compatible;
/// use tempo_core::models::{Frequency, RoutineSpec};
///
/// let schedule = [RoutineSpec(6, 30)];
/// assert!(routine_compatible(&schedule, Frequency::Week));
/// assert!(!routine_compatible(&schedule, Frequency::Day));
/// ```
pub fn routine_compatible(rschedule: &[RoutineSpec], frequency: Frequency) -> bool {
    rschedule
        .iter()
        .all(|spec| duration_in_bounds(spec.duration()) && frequency.contains_offset(spec.offset()))
}

/// Whether every goal entry is structurally valid and dated inside the
/// `start_date..=deadline` window.
pub fn goal_compatible(gschedule: &[GoalSpec], start_date: Date, deadline: Date) -> bool {
    gschedule
        .iter()
        .all(|spec| duration_in_bounds(spec.duration()) && start_date <= spec.date() && spec.date() <= deadline)
}

/// The sibling-attribute set a schedule must be checked against.
///
/// Exactly two combinations exist - a routine schedule with its frequency,
/// or a goal schedule with its date window - and the closed enum makes any
/// other combination unrepresentable. This replaces dispatching on attribute
/// names at runtime: an attribute edit builds the item's `CompatSet`,
/// substitutes the new value, and re-checks.
#[derive(Debug, Clone, Copy)]
pub enum CompatSet<'a> {
    /// A goal schedule against its start/deadline window
    Goal {
        gschedule: &'a [GoalSpec],
        start_date: Date,
        deadline: Date,
    },

    /// A routine schedule against its frequency
    Routine {
        rschedule: &'a [RoutineSpec],
        frequency: Frequency,
    },
}

impl<'a> CompatSet<'a> {
    /// Builds the compatibility set for an item's current attributes.
    pub fn for_item(item: &'a Item) -> Self {
        match &item.schedule {
            Schedule::Goal {
                start_date,
                deadline,
                gschedule,
            } => CompatSet::Goal {
                gschedule,
                start_date: *start_date,
                deadline: *deadline,
            },
            Schedule::Routine {
                frequency,
                rschedule,
            } => CompatSet::Routine {
                rschedule,
                frequency: *frequency,
            },
        }
    }

    /// Runs the kind-specific compatibility rule.
    pub fn check(&self) -> bool {
        match self {
            CompatSet::Goal {
                gschedule,
                start_date,
                deadline,
            } => goal_compatible(gschedule, *start_date, *deadline),
            CompatSet::Routine {
                rschedule,
                frequency,
            } => routine_compatible(rschedule, *frequency),
        }
    }
}
