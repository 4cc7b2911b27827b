//! Expense CLI commands

use clap::Subcommand;
use std::io::Write;

use crate::display::format_expense_list;
use crate::error::TrackerResult;
use crate::export::export_expenses_csv;
use crate::models::{Amount, Expense};
use crate::services::ExpenseManager;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g. "200" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date token (e.g. 2024-04-05)
        date: String,
        /// Category name; must already exist
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Also attach the expense to the active budget
        #[arg(long)]
        budget: bool,
    },

    /// List recorded expenses
    List {
        /// Only show expenses in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Print CSV instead of a table
        #[arg(long)]
        csv: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command<W: Write>(
    manager: &mut ExpenseManager,
    cmd: ExpenseCommands,
    out: &mut W,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            date,
            category,
            description,
            budget,
        } => {
            let expense =
                manager.add_expense(Amount::from_input(&amount), &date, &category, &description)?;
            writeln!(out, "Recorded expense: {}", expense)?;

            if budget {
                manager.add_expense_to_budget(expense)?;
                writeln!(out, "Attached to budget")?;
            }
        }

        ExpenseCommands::List { category, csv } => {
            let expenses: Vec<&Expense> = match category {
                Some(name) => manager.get_expenses_by_category(&name),
                None => manager.expenses().iter().collect(),
            };

            if csv {
                export_expenses_csv(expenses, out)?;
            } else {
                let symbol = &manager.settings().currency_symbol;
                write!(out, "{}", format_expense_list(expenses, symbol))?;
            }
        }
    }

    Ok(())
}
