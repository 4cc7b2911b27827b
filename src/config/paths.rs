//! Path management for the expense tracker
//!
//! Only the configuration directory is resolved; no expense data is ever
//! written to disk.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (e.g. `~/.config/expense-tracker` on Linux)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_TRACKER_CONFIG_DIR";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "expense-tracker")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    TrackerError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The config directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the config directory if needed
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create config directory: {}", e)))
    }
}
