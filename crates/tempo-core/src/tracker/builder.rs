//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use super::Tracker;
use crate::error::{Result, TrackerError};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    data_path: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tempo/tempo.json` or `~/.local/share/tempo/tempo.json`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the data directory cannot be
    /// created, or `TrackerError::XdgDirectory` if no default path can be
    /// resolved.
    pub fn build(self) -> Result<Tracker> {
        let data_path = match self.data_path {
            Some(path) => path,
            None => Self::default_data_path()?,
        };

        if let Some(parent) = data_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        Ok(Tracker::new(data_path))
    }

    /// Returns the default data file path following XDG Base Directory
    /// specification.
    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tempo")
            .place_data_file("tempo.json")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
