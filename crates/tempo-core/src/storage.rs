//! Whole-document JSON persistence for the collection.
//!
//! The data file holds one JSON document of the form `{"items": [...]}`.
//! Loads read and validate the entire document; saves validate and then
//! replace the entire document through a temporary file in the same
//! directory, so a failed write never leaves a half-written data file
//! behind. The engine itself never performs partial writes.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    error::{Result, TrackerError},
    models::Collection,
    validate,
};

/// Handle to the collection's data file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store for the given data file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The data file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the whole collection. A missing data file is an
    /// empty collection, not an error.
    ///
    /// # Errors
    ///
    /// * `TrackerError::FileSystem` - the file exists but cannot be read
    /// * `TrackerError::Serialization` - the file is not JSON
    /// * `TrackerError::InvalidCollection` - the document fails validation
    pub fn load(&self) -> Result<Collection> {
        if !self.path.exists() {
            return Ok(Collection::new());
        }

        let text = fs::read_to_string(&self.path).map_err(|e| TrackerError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;
        let raw: Value = serde_json::from_str(&text)?;
        validate::decode_collection(raw)
    }

    /// Validates and writes the whole collection atomically.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidCollection` and item-level errors - the
    ///   collection fails validation; nothing is written
    /// * `TrackerError::FileSystem` - the document cannot be written
    pub fn save(&self, collection: &Collection) -> Result<()> {
        collection.validate()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let text = serde_json::to_string_pretty(collection)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| TrackerError::FileSystem {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| TrackerError::FileSystem {
            path: self.path.clone(),
            source: e,
        })
    }
}
