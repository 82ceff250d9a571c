//! Editable item attributes and their static dispatch table.
//!
//! Single-attribute edits are modeled as a closed union: each
//! [`AttributeValue`] variant carries a replacement value of the right shape
//! and knows which sibling attributes it must stay compatible with. The
//! apply step substitutes the value and re-checks only that sibling set, so
//! an edit can never move an item into an invalid state.

use std::str::FromStr;

use jiff::civil::Date;

use super::{duration_in_bounds, Frequency, GoalSpec, Item, ItemKind, RoutineSpec, Schedule};
use crate::{
    calendar::parse_iso_date,
    compat::{goal_compatible, routine_compatible},
    error::{Result, TrackerError},
    validate::description_in_bounds,
};

/// The eight recognized item attribute keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Description,
    Type,
    Active,
    Frequency,
    Rschedule,
    Gschedule,
    StartDate,
    Deadline,
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "description" => Ok(Attribute::Description),
            "type" => Ok(Attribute::Type),
            "active" => Ok(Attribute::Active),
            "frequency" => Ok(Attribute::Frequency),
            "rschedule" => Ok(Attribute::Rschedule),
            "gschedule" => Ok(Attribute::Gschedule),
            "start_date" => Ok(Attribute::StartDate),
            "deadline" => Ok(Attribute::Deadline),
            _ => Err(format!("Invalid attribute: {s}")),
        }
    }
}

impl Attribute {
    /// Convert to the data-file key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Description => "description",
            Attribute::Type => "type",
            Attribute::Active => "active",
            Attribute::Frequency => "frequency",
            Attribute::Rschedule => "rschedule",
            Attribute::Gschedule => "gschedule",
            Attribute::StartDate => "start_date",
            Attribute::Deadline => "deadline",
        }
    }
}

/// An attribute paired with a replacement value of the matching shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Description(String),
    Type(ItemKind),
    Active(bool),
    Frequency(Frequency),
    Rschedule(Vec<RoutineSpec>),
    Gschedule(Vec<GoalSpec>),
    StartDate(Date),
    Deadline(Date),
}

impl AttributeValue {
    /// The attribute this value replaces.
    pub fn attribute(&self) -> Attribute {
        match self {
            AttributeValue::Description(_) => Attribute::Description,
            AttributeValue::Type(_) => Attribute::Type,
            AttributeValue::Active(_) => Attribute::Active,
            AttributeValue::Frequency(_) => Attribute::Frequency,
            AttributeValue::Rschedule(_) => Attribute::Rschedule,
            AttributeValue::Gschedule(_) => Attribute::Gschedule,
            AttributeValue::StartDate(_) => Attribute::StartDate,
            AttributeValue::Deadline(_) => Attribute::Deadline,
        }
    }

    /// Parses a replacement value from its text form, as collected by an
    /// interface layer: schedules as JSON arrays, dates as ISO-8601, the
    /// rest as plain tokens.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the text does not parse to
    /// a value of the attribute's shape or fails its isolated validity
    /// check.
    pub fn parse(attribute: Attribute, raw: &str) -> Result<Self> {
        match attribute {
            Attribute::Description => {
                if !description_in_bounds(raw) {
                    return Err(TrackerError::invalid_input(
                        "description",
                        "must be 1-15 characters",
                    ));
                }
                Ok(AttributeValue::Description(raw.to_string()))
            }
            Attribute::Type => ItemKind::from_str(raw)
                .map(AttributeValue::Type)
                .map_err(|e| TrackerError::invalid_input("type", e)),
            Attribute::Active => match raw {
                "true" => Ok(AttributeValue::Active(true)),
                "false" => Ok(AttributeValue::Active(false)),
                _ => Err(TrackerError::invalid_input(
                    "active",
                    format!("expected 'true' or 'false', got '{raw}'"),
                )),
            },
            Attribute::Frequency => Frequency::from_str(raw)
                .map(AttributeValue::Frequency)
                .map_err(|e| TrackerError::invalid_input("frequency", e)),
            Attribute::Rschedule => RoutineSpec::parse_list(raw).map(AttributeValue::Rschedule),
            Attribute::Gschedule => GoalSpec::parse_list(raw).map(AttributeValue::Gschedule),
            Attribute::StartDate => parse_iso_date(raw).map(AttributeValue::StartDate),
            Attribute::Deadline => parse_iso_date(raw).map(AttributeValue::Deadline),
        }
    }

    /// Substitutes the value into the item, checking it against the sibling
    /// attributes it constrains. The item is untouched on failure.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidArguments` - the attribute does not apply to
    ///   the item's kind
    /// * `TrackerError::InvalidInput` - the value fails its isolated check
    /// * `TrackerError::IncompatibleValue` - the substitution would violate
    ///   the kind's compatibility rule
    pub(crate) fn apply(self, item: &mut Item) -> Result<()> {
        let attribute = self.attribute();
        match (self, &mut item.schedule) {
            (AttributeValue::Description(description), _) => {
                if !description_in_bounds(&description) {
                    return Err(TrackerError::invalid_input(
                        "description",
                        "must be 1-15 characters",
                    ));
                }
                item.description = description;
                Ok(())
            }
            (AttributeValue::Active(active), _) => {
                item.active = active;
                Ok(())
            }
            (AttributeValue::Type(kind), schedule) => {
                // Re-tagging alone would leave wrong-kind fields behind, so
                // only the identity edit is accepted.
                if kind == schedule.kind() {
                    Ok(())
                } else {
                    Err(TrackerError::incompatible(
                        "type",
                        "changing the kind requires replacing the kind-specific fields",
                    ))
                }
            }
            (
                AttributeValue::Frequency(new_frequency),
                Schedule::Routine {
                    frequency,
                    rschedule,
                },
            ) => {
                if !routine_compatible(rschedule, new_frequency) {
                    return Err(TrackerError::incompatible(
                        "frequency",
                        format!(
                            "existing rschedule has offsets outside 0..={}",
                            new_frequency.max_offset()
                        ),
                    ));
                }
                *frequency = new_frequency;
                Ok(())
            }
            (
                AttributeValue::Rschedule(new_rschedule),
                Schedule::Routine {
                    frequency,
                    rschedule,
                },
            ) => {
                if let Some(spec) = new_rschedule.iter().find(|s| !duration_in_bounds(s.duration())) {
                    return Err(TrackerError::invalid_input(
                        "rschedule",
                        format!("duration {} is outside 0..=1440", spec.duration()),
                    ));
                }
                if !routine_compatible(&new_rschedule, *frequency) {
                    return Err(TrackerError::incompatible(
                        "rschedule",
                        format!(
                            "an offset falls outside 0..={} for frequency '{}'",
                            frequency.max_offset(),
                            frequency.as_str()
                        ),
                    ));
                }
                *rschedule = new_rschedule;
                Ok(())
            }
            (
                AttributeValue::Gschedule(new_gschedule),
                Schedule::Goal {
                    start_date,
                    deadline,
                    gschedule,
                },
            ) => {
                if let Some(spec) = new_gschedule.iter().find(|s| !duration_in_bounds(s.duration())) {
                    return Err(TrackerError::invalid_input(
                        "gschedule",
                        format!("duration {} is outside 0..=1440", spec.duration()),
                    ));
                }
                if !goal_compatible(&new_gschedule, *start_date, *deadline) {
                    return Err(TrackerError::incompatible(
                        "gschedule",
                        format!("an entry falls outside {start_date}..={deadline}"),
                    ));
                }
                *gschedule = new_gschedule;
                Ok(())
            }
            (
                AttributeValue::StartDate(new_start),
                Schedule::Goal {
                    start_date,
                    deadline,
                    gschedule,
                },
            ) => {
                if new_start > *deadline {
                    return Err(TrackerError::incompatible(
                        "start_date",
                        format!("start date {new_start} exceeds deadline {deadline}"),
                    ));
                }
                if !goal_compatible(gschedule, new_start, *deadline) {
                    return Err(TrackerError::incompatible(
                        "start_date",
                        "existing gschedule entries would fall outside the window",
                    ));
                }
                *start_date = new_start;
                Ok(())
            }
            (
                AttributeValue::Deadline(new_deadline),
                Schedule::Goal {
                    start_date,
                    deadline,
                    gschedule,
                },
            ) => {
                if *start_date > new_deadline {
                    return Err(TrackerError::incompatible(
                        "deadline",
                        format!("deadline {new_deadline} precedes start date {start_date}"),
                    ));
                }
                if !goal_compatible(gschedule, *start_date, new_deadline) {
                    return Err(TrackerError::incompatible(
                        "deadline",
                        "existing gschedule entries would fall outside the window",
                    ));
                }
                *deadline = new_deadline;
                Ok(())
            }
            (_, schedule) => Err(TrackerError::invalid_arguments(format!(
                "attribute '{}' does not apply to a {} item",
                attribute.as_str(),
                schedule.kind().as_str()
            ))),
        }
    }
}
