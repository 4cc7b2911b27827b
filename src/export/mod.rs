//! Export module
//!
//! Writes the in-memory state out in several formats:
//! - CSV: expense lists (spreadsheet-compatible)
//! - JSON: machine-readable snapshot
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_snapshot_json, Snapshot, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_snapshot_yaml;
