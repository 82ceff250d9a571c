//! Parameter structures for tracker operations.
//!
//! Plain serde-derived structures shared across interfaces, free of any CLI
//! framework derives. Interface layers wrap these with their own argument
//! types and convert via `From`, keeping framework concerns out of the core.
//!
//! Date and value fields stay in their text form here; the tracker parses
//! them with the engine's own validators so every interface gets identical
//! error behavior.

use serde::{Deserialize, Serialize};

/// Parameters for deleting an item by description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteItem {
    /// Description of the item to delete
    pub description: String,
}

/// Parameters for toggling an item's advisory active flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleItem {
    /// Description of the item to toggle
    pub description: String,
}

/// Parameters for replacing a single attribute of an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditItem {
    /// Description of the item to edit
    pub description: String,

    /// One of the eight attribute keys (`description`, `type`, `active`,
    /// `frequency`, `rschedule`, `gschedule`, `start_date`, `deadline`)
    pub attribute: String,

    /// Replacement value in text form; schedules as JSON arrays, dates as
    /// ISO-8601
    pub value: String,
}

/// Parameters for querying the items scheduled on a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnDate {
    /// ISO-8601 calendar date to query
    pub date: String,

    /// Whether inactive items appear in the result. The flag is advisory
    /// metadata, so they do by default.
    #[serde(default = "default_include_inactive")]
    pub include_inactive: bool,
}

fn default_include_inactive() -> bool {
    true
}

impl Default for OnDate {
    fn default() -> Self {
        Self {
            date: String::new(),
            include_inactive: true,
        }
    }
}
