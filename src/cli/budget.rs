//! Budget CLI commands

use clap::Subcommand;
use std::io::Write;

use crate::display::format_budget_status;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Expense};
use crate::services::ExpenseManager;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Create a budget, replacing the current one
    Create {
        /// Start of the range
        start_date: String,
        /// End of the range
        end_date: String,
        /// Planned amount
        #[arg(allow_hyphen_values = true)]
        planned_amount: String,
    },

    /// Attach an expense directly to the budget, without validation
    #[command(name = "add-expense")]
    AddExpense {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        date: String,
        category: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Show planned vs. spent for the current budget
    Status,
}

/// Handle a budget command
pub fn handle_budget_command<W: Write>(
    manager: &mut ExpenseManager,
    cmd: BudgetCommands,
    out: &mut W,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Create {
            start_date,
            end_date,
            planned_amount,
        } => {
            let budget =
                manager.create_budget(&start_date, &end_date, Amount::from_input(&planned_amount))?;
            writeln!(out, "Created budget: {}", budget)?;
        }

        BudgetCommands::AddExpense {
            amount,
            date,
            category,
            description,
        } => {
            let expense = Expense::new(Amount::from_input(&amount), date, category, description);
            manager.add_expense_to_budget(expense)?;
            writeln!(out, "Attached expense to budget")?;
        }

        BudgetCommands::Status => {
            let budget = manager.budget().ok_or(TrackerError::NoBudgetDefined)?;
            let symbol = &manager.settings().currency_symbol;
            write!(out, "{}", format_budget_status(&budget.status(), symbol))?;
        }
    }

    Ok(())
}
