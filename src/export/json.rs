//! JSON Export functionality
//!
//! Writes a snapshot of the manager's in-memory state. Snapshots are output
//! only; nothing reads them back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Category, Expense};
use crate::reports::CategoryTotal;
use crate::services::ExpenseManager;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the manager holds, plus the report totals
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub categories: &'a [Category],

    pub expenses: &'a [Expense],

    pub budget: Option<&'a Budget>,

    /// Per-category totals over `expenses`
    pub report: Vec<CategoryTotal>,
}

impl<'a> Snapshot<'a> {
    /// Capture the current state of `manager`
    pub fn from_manager(manager: &'a ExpenseManager) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            categories: manager.categories(),
            expenses: manager.expenses(),
            budget: manager.budget(),
            report: manager
                .report()
                .map(|r| r.generate_report())
                .unwrap_or_default(),
        }
    }
}

/// Export the snapshot as pretty-printed JSON
pub fn export_snapshot_json<W: Write>(manager: &ExpenseManager, writer: &mut W) -> TrackerResult<()> {
    let snapshot = Snapshot::from_manager(manager);

    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
