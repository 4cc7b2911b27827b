//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::Snapshot;
use crate::services::ExpenseManager;

/// Export the snapshot as YAML
pub fn export_snapshot_yaml<W: Write>(manager: &ExpenseManager, writer: &mut W) -> TrackerResult<()> {
    let snapshot = Snapshot::from_manager(manager);

    writeln!(writer, "# Expense tracker snapshot")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
