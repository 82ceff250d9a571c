//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A value fails an isolated structural, type, or range check
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// A caller supplied an attribute that does not apply to the item's kind,
    /// or an otherwise unsupported combination of arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments { reason: String },

    /// A value is individually well-formed but violates a cross-attribute rule
    #[error("Incompatible value for field '{field}': {reason}")]
    IncompatibleValue { field: String, reason: String },

    /// No item with the given description exists in the collection
    #[error("No item with description '{description}'")]
    NotFound { description: String },

    /// A candidate item failed validation during an add operation
    #[error("Invalid item: {reason}")]
    InvalidItem { reason: String },

    /// The collection itself violates a structural or uniqueness invariant
    #[error("Invalid collection: {reason}")]
    InvalidCollection { reason: String },

    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

impl TrackerError {
    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported-arguments error.
    pub fn invalid_arguments(reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            reason: reason.into(),
        }
    }

    /// Creates a cross-attribute compatibility error for a field.
    pub fn incompatible(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IncompatibleValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing-item error for a description.
    pub fn not_found(description: impl Into<String>) -> Self {
        Self::NotFound {
            description: description.into(),
        }
    }

    /// Creates a collection invariant error.
    pub fn invalid_collection(reason: impl Into<String>) -> Self {
        Self::InvalidCollection {
            reason: reason.into(),
        }
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
