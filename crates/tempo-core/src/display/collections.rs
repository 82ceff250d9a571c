//! Collection wrapper types for displaying groups of items.

use std::{fmt, ops::Index};

use jiff::civil::Date;

use crate::models::Item;

/// Newtype wrapper for displaying a list of items.
///
/// Handles the empty collection gracefully and keeps title handling with
/// the caller.
pub struct Items(pub Vec<Item>);

impl Items {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the item at the given index.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No items found.");
        }
        for item in &self.0 {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

/// The items scheduled on one date, headed by the date itself.
pub struct Agenda {
    pub date: Date,
    pub items: Items,
}

impl Agenda {
    /// Create an agenda for a date.
    pub fn new(date: Date, items: Vec<Item>) -> Self {
        Self {
            date,
            items: Items(items),
        }
    }
}

impl fmt::Display for Agenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.date)?;
        writeln!(f)?;
        if self.items.is_empty() {
            writeln!(f, "Nothing scheduled.")
        } else {
            write!(f, "{}", self.items)
        }
    }
}
