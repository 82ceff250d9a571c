//! Collection model and the mutation operators built on it.
//!
//! Every mutation is validate-then-apply: the collection and the incoming
//! value are checked before anything changes, and a failed check leaves the
//! collection exactly as it was. Description uniqueness is a property of the
//! collection snapshot, checked here at validation time rather than through
//! any construction-time registry.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{AttributeValue, Item};
use crate::error::{Result, TrackerError};

/// A set of items keyed by description.
///
/// Serializes as the whole-document form used by the data file:
/// `{"items": [...]}` with no other top-level fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Collection {
    pub items: Vec<Item>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by its description.
    pub fn get(&self, description: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.description == description)
    }

    /// Whether an item with the description exists.
    pub fn contains(&self, description: &str) -> bool {
        self.get(description).is_some()
    }

    /// Validates the whole collection: description uniqueness plus every
    /// item's own validity.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidCollection` - two items share a description
    /// * item-level errors propagate unchanged
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.description.as_str()) {
                return Err(TrackerError::invalid_collection(format!(
                    "duplicate description '{}'",
                    item.description
                )));
            }
            item.validate()?;
        }
        Ok(())
    }

    /// Appends a new item after validating both the collection and the item.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidCollection` - the collection is already
    ///   invalid, or the item's description collides with an existing one
    /// * `TrackerError::InvalidItem` - the candidate item fails validation
    pub fn add_item(&mut self, item: Item) -> Result<&Item> {
        self.validate()?;
        item.validate()
            .map_err(|e| TrackerError::InvalidItem { reason: e.to_string() })?;
        if self.contains(&item.description) {
            return Err(TrackerError::invalid_collection(format!(
                "duplicate description '{}'",
                item.description
            )));
        }
        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Removes the item with the given description and returns it.
    ///
    /// # Errors
    ///
    /// * `TrackerError::NotFound` - no item has that description
    pub fn delete_item(&mut self, description: &str) -> Result<Item> {
        self.validate()?;
        let index = self
            .items
            .iter()
            .position(|item| item.description == description)
            .ok_or_else(|| TrackerError::not_found(description))?;
        Ok(self.items.remove(index))
    }

    /// Flips the item's advisory `active` flag. Toggling twice restores the
    /// original collection.
    ///
    /// # Errors
    ///
    /// * `TrackerError::NotFound` - no item has that description
    pub fn toggle_active(&mut self, description: &str) -> Result<&Item> {
        self.validate()?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.description == description)
            .ok_or_else(|| TrackerError::not_found(description))?;
        item.active = !item.active;
        Ok(item)
    }

    /// Replaces a single attribute of the named item, leaving the rest of
    /// the item untouched. The replacement is applied to a copy and only
    /// committed once the resulting item revalidates, so the operation can
    /// never leave an invalid item behind.
    ///
    /// # Errors
    ///
    /// * `TrackerError::NotFound` - no item has that description
    /// * `TrackerError::InvalidArguments` - the attribute does not apply to
    ///   the item's kind
    /// * `TrackerError::InvalidInput` - the value fails its isolated check
    /// * `TrackerError::IncompatibleValue` - the substitution violates the
    ///   kind's compatibility rule
    /// * `TrackerError::InvalidCollection` - a description edit collides
    ///   with another item
    pub fn edit_attribute(&mut self, description: &str, value: AttributeValue) -> Result<&Item> {
        self.validate()?;
        let index = self
            .items
            .iter()
            .position(|item| item.description == description)
            .ok_or_else(|| TrackerError::not_found(description))?;

        let mut candidate = self.items[index].clone();
        value.apply(&mut candidate)?;

        if candidate.description != description && self.contains(&candidate.description) {
            return Err(TrackerError::invalid_collection(format!(
                "duplicate description '{}'",
                candidate.description
            )));
        }
        candidate.validate()?;

        self.items[index] = candidate;
        Ok(&self.items[index])
    }
}
