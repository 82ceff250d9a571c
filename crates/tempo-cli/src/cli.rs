//! Command argument definitions and handlers.
//!
//! Follows the parameter wrapper pattern: each command gets a clap argument
//! struct here that converts into the framework-free parameter types of
//! `tempo-core` via `From`, so CLI concerns (flags, help text, aliases)
//! never leak into the engine. The [`Cli`] struct pairs a tracker with a
//! renderer and runs one command end to end.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use tempo_core::{
    calendar::parse_iso_date,
    display::{AddResult, Agenda, DeleteResult, Items, ToggleResult, UpdateResult},
    models::{Frequency, GoalSpec, Item, RoutineSpec},
    params::{DeleteItem, EditItem, OnDate, ToggleItem},
    Tracker,
};

use crate::renderer::TerminalRenderer;

/// Show the items scheduled on a date
///
/// Goals match when an entry is dated exactly on the queried date; routines
/// match when the date's weekday, day of month, or day of year lines up
/// with a schedule offset. Inactive items are included unless hidden - the
/// active flag is advisory, not a scheduling gate.
#[derive(Args)]
pub struct OnArgs {
    /// ISO-8601 calendar date (YYYY-MM-DD)
    pub date: String,

    /// Leave out items whose active flag is off
    #[arg(long)]
    pub hide_inactive: bool,
}

impl From<OnArgs> for OnDate {
    fn from(val: OnArgs) -> Self {
        OnDate {
            date: val.date,
            include_inactive: !val.hide_inactive,
        }
    }
}

/// Command-line argument representation of routine frequencies
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FrequencyArg {
    /// Recurs every day
    Day,
    /// Recurs weekly by weekday (Monday = 0)
    Week,
    /// Recurs monthly by zero-based day of the month
    Month,
    /// Recurs yearly by zero-based day of the year
    Year,
}

impl From<FrequencyArg> for Frequency {
    fn from(val: FrequencyArg) -> Self {
        match val {
            FrequencyArg::Day => Frequency::Day,
            FrequencyArg::Week => Frequency::Week,
            FrequencyArg::Month => Frequency::Month,
            FrequencyArg::Year => Frequency::Year,
        }
    }
}

/// Add a new goal
#[derive(Args)]
pub struct AddGoalArgs {
    /// Description, 1-15 characters, unique within the collection
    pub description: String,

    /// First day of the goal's window (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: String,

    /// Last day of the goal's window (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: String,

    /// Schedule as a JSON list of [date, minutes] pairs,
    /// e.g. '[["2024-03-01", 30]]'
    #[arg(long, default_value = "[]")]
    pub gschedule: String,

    /// Create the item with its active flag off
    #[arg(long)]
    pub inactive: bool,
}

/// Add a new routine
#[derive(Args)]
pub struct AddRoutineArgs {
    /// Description, 1-15 characters, unique within the collection
    pub description: String,

    /// Recurrence frequency
    #[arg(long, value_enum)]
    pub frequency: FrequencyArg,

    /// Schedule as a JSON list of [offset, minutes] pairs,
    /// e.g. '[[0, 60]]' for Mondays under the week frequency
    #[arg(long, default_value = "[]")]
    pub rschedule: String,

    /// Create the item with its active flag off
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// Add a goal scheduled on explicit dates
    #[command(alias = "g")]
    Goal(AddGoalArgs),
    /// Add a routine recurring by offset
    #[command(alias = "r")]
    Routine(AddRoutineArgs),
}

/// Delete an item by description
#[derive(Args)]
pub struct DeleteArgs {
    /// Description of the item to delete
    pub description: String,
}

impl From<DeleteArgs> for DeleteItem {
    fn from(val: DeleteArgs) -> Self {
        DeleteItem {
            description: val.description,
        }
    }
}

/// Toggle an item's active flag
#[derive(Args)]
pub struct ToggleArgs {
    /// Description of the item to toggle
    pub description: String,
}

impl From<ToggleArgs> for ToggleItem {
    fn from(val: ToggleArgs) -> Self {
        ToggleItem {
            description: val.description,
        }
    }
}

/// Replace a single attribute of an item
///
/// The attribute is one of the eight item keys; the value arrives in text
/// form - schedules as JSON arrays, dates as ISO-8601, the active flag as
/// true/false. The edit is rejected when the resulting item would violate
/// the kind's compatibility rules, so the collection can never be edited
/// into an invalid state.
#[derive(Args)]
pub struct EditArgs {
    /// Description of the item to edit
    pub description: String,

    /// Attribute key (description, type, active, frequency, rschedule,
    /// gschedule, start_date, deadline)
    pub attribute: String,

    /// Replacement value in text form
    pub value: String,
}

impl From<EditArgs> for EditItem {
    fn from(val: EditArgs) -> Self {
        EditItem {
            description: val.description,
            attribute: val.attribute,
            value: val.value,
        }
    }
}

/// CLI command executor pairing a tracker with a terminal renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI executor.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// List the whole collection.
    pub fn list_items(&self) -> Result<()> {
        let collection = self.tracker.list_items()?;
        let output = format!("# Items\n\n{}", Items(collection.items));
        self.renderer.render(&output)
    }

    /// Show the items scheduled on a date.
    pub fn items_on_date(&self, args: OnArgs) -> Result<()> {
        let (date, items) = self.tracker.items_on_date(&args.into())?;
        self.renderer.render(&format!("{}", Agenda::new(date, items)))
    }

    /// Add a goal item.
    pub fn add_goal(&self, args: AddGoalArgs) -> Result<()> {
        let start_date = parse_iso_date(&args.start_date)?;
        let deadline = parse_iso_date(&args.deadline)?;
        let gschedule = GoalSpec::parse_list(&args.gschedule)?;
        let item = Item::goal(args.description, !args.inactive, start_date, deadline, gschedule);
        let added = self.tracker.add_item(item)?;
        self.renderer.render(&format!("{}", AddResult::new(added)))
    }

    /// Add a routine item.
    pub fn add_routine(&self, args: AddRoutineArgs) -> Result<()> {
        let rschedule = RoutineSpec::parse_list(&args.rschedule)?;
        let item = Item::routine(
            args.description,
            !args.inactive,
            args.frequency.into(),
            rschedule,
        );
        let added = self.tracker.add_item(item)?;
        self.renderer.render(&format!("{}", AddResult::new(added)))
    }

    /// Delete an item by description.
    pub fn delete_item(&self, args: DeleteArgs) -> Result<()> {
        let removed = self.tracker.delete_item(&args.into())?;
        self.renderer.render(&format!("{}", DeleteResult::new(removed)))
    }

    /// Toggle an item's active flag.
    pub fn toggle_item(&self, args: ToggleArgs) -> Result<()> {
        let toggled = self.tracker.toggle_active(&args.into())?;
        self.renderer.render(&format!("{}", ToggleResult::new(toggled)))
    }

    /// Replace a single attribute of an item.
    pub fn edit_item(&self, args: EditArgs) -> Result<()> {
        let params: EditItem = args.into();
        let updated = self.tracker.edit_attribute(&params)?;
        let changes = vec![format!("Set {} to {}", params.attribute, params.value)];
        self.renderer
            .render(&format!("{}", UpdateResult::with_changes(updated, changes)))
    }
}
