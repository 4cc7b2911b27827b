//! Script runner
//!
//! Executes one command per line against a single in-memory manager. Lines
//! are split with shell quoting rules, so descriptions can contain spaces.
//!
//! ```text
//! # comments and blank lines are skipped
//! category add Clothing -d "Buying clothes"
//! budget create 2024-04-01 2024-04-30 1000
//! expense add 200 2024-04-05 Clothing -d Trousers --budget
//! report
//! ```

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

use super::budget::{handle_budget_command, BudgetCommands};
use super::category::{handle_category_command, CategoryCommands};
use super::expense::{handle_expense_command, ExpenseCommands};
use super::report::{handle_export_command, handle_report_command, ExportArgs, ReportArgs};
use crate::error::{TrackerError, TrackerResult};
use crate::services::ExpenseManager;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ScriptLine {
    #[command(subcommand)]
    command: ScriptCommand,
}

/// Commands accepted on a script line
#[derive(Subcommand, Debug)]
pub enum ScriptCommand {
    /// Category management
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Expense management
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Budget management
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Print the category report
    Report(ReportArgs),

    /// Export a snapshot of the current state
    Export(ExportArgs),
}

/// Counts gathered while running a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands that completed
    pub executed: usize,
    /// Commands rejected by the manager and reported as warnings
    pub warnings: usize,
}

/// Run a single parsed command
pub fn execute_command<W: Write>(
    manager: &mut ExpenseManager,
    command: ScriptCommand,
    out: &mut W,
) -> TrackerResult<()> {
    match command {
        ScriptCommand::Category(cmd) => handle_category_command(manager, cmd, out),
        ScriptCommand::Expense(cmd) => handle_expense_command(manager, cmd, out),
        ScriptCommand::Budget(cmd) => handle_budget_command(manager, cmd, out),
        ScriptCommand::Report(args) => handle_report_command(manager, args, out),
        ScriptCommand::Export(args) => handle_export_command(manager, args, out),
    }
}

/// Run every line of `input` against `manager`.
///
/// Manager rejections are printed as `warning: ...` and the script goes on,
/// unless `strict` is set. Lines that do not parse always stop the run.
pub fn run_script<R: BufRead, W: Write>(
    manager: &mut ExpenseManager,
    input: R,
    out: &mut W,
    strict: bool,
) -> TrackerResult<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let words =
            shell_words::split(line).map_err(|e| TrackerError::script(line_no, e.to_string()))?;

        let parsed = match ScriptLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                write!(out, "{}", e.render())?;
                continue;
            }
            Err(e) => return Err(TrackerError::script(line_no, clap_message(&e))),
        };

        match execute_command(manager, parsed.command, out) {
            Ok(()) => summary.executed += 1,
            Err(err) if err.is_domain() && !strict => {
                writeln!(out, "warning: {}", err)?;
                summary.warnings += 1;
            }
            Err(err) if err.is_domain() => {
                return Err(TrackerError::script(line_no, err.to_string()));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(summary)
}

/// First line of a clap error, without the `error: ` prefix
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str, strict: bool) -> (ExpenseManager, TrackerResult<ScriptSummary>, String) {
        let mut manager = ExpenseManager::new();
        let mut out = Vec::new();
        let result = run_script(&mut manager, script.as_bytes(), &mut out, strict);
        (manager, result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_script() {
        let script = r#"
# set up
category add Clothing -d "Buying clothes"
category add Travel
budget create 2024-04-01 2024-04-30 1000
expense add 200 2024-04-05 Clothing -d "Blue trousers"
expense add 150 2024-04-10 Food -d Lunch
report
"#;
        let (manager, result, output) = run(script, false);
        let summary = result.unwrap();

        assert_eq!(summary, ScriptSummary { executed: 5, warnings: 1 });
        assert_eq!(manager.expenses().len(), 1);
        assert_eq!(manager.expenses()[0].description, "Blue trousers");
        assert!(manager.budget().unwrap().expenses.is_empty());
        assert!(output.contains("warning: Invalid expense data: unknown category 'Food'\n"));
        assert!(output.ends_with("Expense report:\nClothing: $200\n"));
    }

    #[test]
    fn test_strict_stops_on_rejection() {
        let script = "category add Travel\ncategory new Travel\nreport\n";
        let (manager, result, _) = run(script, true);

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Script error on line 2: Category already exists: Travel"
        );
        assert_eq!(manager.categories().len(), 1);
    }

    #[test]
    fn test_negative_amount_is_rejected_not_misparsed() {
        let script = "category add Food\nexpense add -5 2024-04-01 Food\n";
        let (manager, result, output) = run(script, false);

        assert_eq!(result.unwrap().warnings, 1);
        assert!(output.contains("amount must be a number greater than zero (got '-5')"));
        assert!(manager.expenses().is_empty());
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let (_, result, _) = run("category add Food\n\nfly away\n", false);
        match result {
            Err(TrackerError::Script { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected script error, got {:?}", other),
        }
    }

    #[test]
    fn test_unbalanced_quotes() {
        let (_, result, _) = run("category add \"Food\n", false);
        assert!(matches!(result, Err(TrackerError::Script { line: 1, .. })));
    }

    #[test]
    fn test_budget_flow() {
        let script = "\
category add Travel
expense add 300 2024-04-20 Travel --budget
budget add-expense 701 2024-04-21 Anything
budget status
";
        let (manager, result, output) = run(script, false);

        // No budget yet: the expense is recorded, everything budget-related warns
        assert_eq!(result.unwrap().warnings, 3);
        assert_eq!(manager.expenses().len(), 1);
        assert!(manager.budget().is_none());
        assert!(output.contains("warning: No budget created yet"));
    }
}
