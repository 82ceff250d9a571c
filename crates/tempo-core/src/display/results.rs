//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper pairs a confirmation line with the affected item so every
//! mutation prints the same way regardless of the interface that ran it.

use std::fmt;

use crate::models::Item;

/// Wrapper type for displaying the result of add operations.
pub struct AddResult {
    pub item: Item,
}

impl AddResult {
    /// Create a new AddResult wrapper.
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added {} '{}'", self.item.kind(), self.item.description)?;
        writeln!(f)?;
        write!(f, "{}", self.item)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult {
    pub item: Item,
}

impl DeleteResult {
    /// Create a new DeleteResult wrapper.
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} '{}'", self.item.kind(), self.item.description)
    }
}

/// Wrapper type for displaying the result of toggle operations.
pub struct ToggleResult {
    pub item: Item,
}

impl ToggleResult {
    /// Create a new ToggleResult wrapper.
    pub fn new(item: Item) -> Self {
        Self { item }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Item '{}' is now {}",
            self.item.description,
            if self.item.active { "active" } else { "inactive" }
        )
    }
}

/// Wrapper type for displaying the result of attribute edits.
pub struct UpdateResult {
    pub item: Item,
    pub changes: Vec<String>,
}

impl UpdateResult {
    /// Create a new UpdateResult wrapper.
    pub fn new(item: Item) -> Self {
        Self {
            item,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(item: Item, changes: Vec<String>) -> Self {
        Self { item, changes }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item '{}'", self.item.description)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.item)
    }
}
