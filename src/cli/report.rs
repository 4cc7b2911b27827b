//! CLI commands for reports and exports

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_snapshot_json, export_snapshot_yaml};
use crate::reports::Report;
use crate::services::ExpenseManager;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Csv,
}

/// Snapshot export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Write to this file instead of the output stream
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the report command
pub fn handle_report_command<W: Write>(
    manager: &ExpenseManager,
    args: ReportArgs,
    out: &mut W,
) -> TrackerResult<()> {
    match args.format {
        ReportFormat::Text => {
            let text = manager.generate_report();
            if text.ends_with('\n') {
                write!(out, "{}", text)?;
            } else {
                writeln!(out, "{}", text)?;
            }
        }
        ReportFormat::Csv => {
            Report::with_settings(manager.expenses(), manager.settings()).export_csv(out)?;
        }
    }

    Ok(())
}

/// Handle the export command
pub fn handle_export_command<W: Write>(
    manager: &ExpenseManager,
    args: ExportArgs,
    out: &mut W,
) -> TrackerResult<()> {
    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_snapshot(manager, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            writeln!(out, "Snapshot exported to: {}", path.display())?;
        }
        None => write_snapshot(manager, args.format, out)?,
    }

    Ok(())
}

fn write_snapshot<W: Write>(
    manager: &ExpenseManager,
    format: ExportFormat,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Json => export_snapshot_json(manager, writer),
        ExportFormat::Yaml => export_snapshot_yaml(manager, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_with_expense() -> ExpenseManager {
        let mut manager = ExpenseManager::new();
        manager.add_category("Clothing", "");
        manager.add_expense(200, "2024-04-05", "Clothing", "Trousers").unwrap();
        manager
    }

    #[test]
    fn test_text_report_on_empty_manager() {
        let manager = ExpenseManager::new();
        let mut out = Vec::new();
        let args = ReportArgs {
            format: ReportFormat::Text,
        };
        handle_report_command(&manager, args, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No expenses recorded yet.\n");
    }

    #[test]
    fn test_csv_report() {
        let manager = manager_with_expense();
        let mut out = Vec::new();
        let args = ReportArgs {
            format: ReportFormat::Csv,
        };
        handle_report_command(&manager, args, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "category,total,count\nClothing,200.0,1\n"
        );
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        let manager = manager_with_expense();

        let mut out = Vec::new();
        let args = ExportArgs {
            format: ExportFormat::Json,
            output: Some(path.clone()),
        };
        handle_export_command(&manager, args, &mut out).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["expenses"][0]["category"], "Clothing");
        assert!(String::from_utf8(out).unwrap().starts_with("Snapshot exported to:"));
    }
}
