//! High-level tracker API over the engine and the data file.
//!
//! The [`Tracker`] is the facade interface layers talk to: each operation
//! loads the whole collection from the data file, runs one engine operation
//! on the in-memory value, and writes the whole collection back. Mutations
//! are validate-then-apply all the way down, so a rejected operation leaves
//! the data file untouched. The tracker owns the collection exclusively for
//! the lifetime of an operation; there is no locking and no partial commit.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use jiff::civil::Date;
use log::{debug, info};

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

use crate::{
    calendar::parse_iso_date,
    error::{Result, TrackerError},
    membership,
    models::{Attribute, AttributeValue, Collection, Item},
    params::{DeleteItem, EditItem, OnDate, ToggleItem},
    storage::Store,
};

/// Main tracker interface for managing goals and routines.
pub struct Tracker {
    data_path: PathBuf,
}

impl Tracker {
    /// Creates a tracker over the given data file path.
    pub(crate) fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }

    /// The data file path this tracker operates on.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn store(&self) -> Store {
        Store::new(&self.data_path)
    }

    /// Loads the whole collection.
    pub fn list_items(&self) -> Result<Collection> {
        debug!("loading collection from {}", self.data_path.display());
        self.store().load()
    }

    /// Validates and appends a new item, then persists the collection.
    pub fn add_item(&self, item: Item) -> Result<Item> {
        let store = self.store();
        let mut collection = store.load()?;
        let added = collection.add_item(item)?.clone();
        store.save(&collection)?;
        info!("added {} '{}'", added.kind().as_str(), added.description);
        Ok(added)
    }

    /// Removes an item by description, then persists the collection.
    pub fn delete_item(&self, params: &DeleteItem) -> Result<Item> {
        let store = self.store();
        let mut collection = store.load()?;
        let removed = collection.delete_item(&params.description)?;
        store.save(&collection)?;
        info!("deleted item '{}'", removed.description);
        Ok(removed)
    }

    /// Flips an item's advisory active flag, then persists the collection.
    pub fn toggle_active(&self, params: &ToggleItem) -> Result<Item> {
        let store = self.store();
        let mut collection = store.load()?;
        let toggled = collection.toggle_active(&params.description)?.clone();
        store.save(&collection)?;
        info!(
            "item '{}' is now {}",
            toggled.description,
            if toggled.active { "active" } else { "inactive" }
        );
        Ok(toggled)
    }

    /// Replaces a single attribute of an item, then persists the collection.
    ///
    /// The attribute name and value arrive in text form; both are parsed
    /// and validated before anything is applied.
    pub fn edit_attribute(&self, params: &EditItem) -> Result<Item> {
        let attribute = Attribute::from_str(&params.attribute)
            .map_err(TrackerError::invalid_arguments)?;
        let value = AttributeValue::parse(attribute, &params.value)?;

        let store = self.store();
        let mut collection = store.load()?;
        let updated = collection.edit_attribute(&params.description, value)?.clone();
        store.save(&collection)?;
        info!(
            "set {} on item '{}'",
            attribute.as_str(),
            updated.description
        );
        Ok(updated)
    }

    /// Returns the items scheduled on a date, in collection order, along
    /// with the parsed date.
    pub fn items_on_date(&self, params: &OnDate) -> Result<(Date, Vec<Item>)> {
        let date = parse_iso_date(&params.date)?;
        let collection = self.store().load()?;
        let matched = membership::items_on_date(&collection, date, params.include_inactive)?
            .into_iter()
            .cloned()
            .collect();
        Ok((date, matched))
    }
}
