//! User settings for the expense tracker
//!
//! Controls report labels and the default log filter. Settings are read from
//! `config.json`; a missing file or missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Header line used by text reports unless configured otherwise
pub const DEFAULT_REPORT_HEADER: &str = "Expense report:";

/// Message returned when a report is requested with no expenses recorded
pub const DEFAULT_EMPTY_REPORT_MESSAGE: &str = "No expenses recorded yet.";

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol printed before amounts in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// First line of a text report
    #[serde(default = "default_report_header")]
    pub report_header: String,

    /// Report text when there is nothing to report
    #[serde(default = "default_empty_report_message")]
    pub empty_report_message: String,

    /// tracing filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_report_header() -> String {
    DEFAULT_REPORT_HEADER.to_string()
}

fn default_empty_report_message() -> String {
    DEFAULT_EMPTY_REPORT_MESSAGE.to_string()
}

fn default_log_filter() -> String {
    "expense_tracker=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            report_header: default_report_header(),
            empty_report_message: default_empty_report_message(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            TrackerError::Io(format!("Failed to read settings file: {}", e))
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.report_header, "Expense report:");
        assert_eq!(settings.empty_report_message, "No expenses recorded yet.");
        assert_eq!(settings.log_filter, "expense_tracker=warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "₴".into(),
            report_header: "Spending:".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "₴");
        assert_eq!(loaded.report_header, "Spending:");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.report_header, DEFAULT_REPORT_HEADER);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
