//! Budget display formatting

use crate::models::BudgetStatus;

/// Format a budget summary for terminal output
pub fn format_budget_status(status: &BudgetStatus, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget: {} to {}\n",
        status.start_date, status.end_date
    ));
    output.push_str(&format!(
        "  Planned:   {}{}\n",
        currency_symbol, status.planned
    ));
    output.push_str(&format!(
        "  Spent:     {}{} ({} expenses)\n",
        currency_symbol, status.spent, status.expense_count
    ));
    output.push_str(&format!(
        "  Remaining: {}{}\n",
        currency_symbol, status.remaining
    ));

    if status.within_plan {
        output.push_str("  Within plan\n");
    } else {
        output.push_str("  Over plan\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Expense};

    #[test]
    fn test_within_plan() {
        let mut budget = Budget::new("2024-04-01", "2024-04-30", 1000.0);
        budget.add_expense(Expense::new(300, "2024-04-20", "Travel", ""));

        let output = format_budget_status(&budget.status(), "$");
        assert_eq!(
            output,
            "Budget: 2024-04-01 to 2024-04-30\n  Planned:   $1000\n  Spent:     $300 (1 expenses)\n  Remaining: $700\n  Within plan\n"
        );
    }

    #[test]
    fn test_over_plan() {
        let mut budget = Budget::new("2024-04-01", "2024-04-30", 100.0);
        budget.add_expense(Expense::new(101, "2024-04-20", "Travel", ""));

        let output = format_budget_status(&budget.status(), "$");
        assert!(output.contains("Remaining: $-1"));
        assert!(output.ends_with("Over plan\n"));
    }
}
