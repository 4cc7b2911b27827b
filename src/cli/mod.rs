//! CLI command handlers
//!
//! Bridges clap argument parsing with the expense manager. Handlers write to
//! any `Write` so scripts, the binary and tests share one code path.

pub mod budget;
pub mod category;
pub mod demo;
pub mod expense;
pub mod report;
pub mod script;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use demo::run_demo;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_export_command, handle_report_command, ExportArgs, ReportArgs};
pub use script::{execute_command, run_script, ScriptCommand, ScriptSummary};
