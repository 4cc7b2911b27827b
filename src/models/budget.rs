//! Budget model
//!
//! A budget is a spending ceiling over a date range. It owns its own list of
//! expenses, separate from the manager's; expenses only get here through
//! explicit calls to [`Budget::add_expense`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;

/// A planned spending ceiling with the expenses counted against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Start of the budget range; only checked for presence
    pub start_date: String,

    /// End of the budget range; only checked for presence
    pub end_date: String,

    /// The most that may be spent
    pub planned_amount: f64,

    /// Expenses counted against this budget
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// When the budget was created
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create an empty budget
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        planned_amount: f64,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            planned_amount,
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Check whether the attached expenses fit within the planned amount
    pub fn plan_budget(&self) -> bool {
        self.get_total_expenses() <= self.planned_amount
    }

    /// Attach an expense. No date-range or duplicate checks.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Sum of all attached expense amounts
    pub fn get_total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount.value()).sum()
    }

    /// Planned amount minus spending; negative when over plan
    pub fn remaining(&self) -> f64 {
        self.planned_amount - self.get_total_expenses()
    }

    /// Snapshot of the budget's current standing
    pub fn status(&self) -> BudgetStatus {
        let spent = self.get_total_expenses();
        BudgetStatus {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            planned: self.planned_amount,
            spent,
            remaining: self.planned_amount - spent,
            expense_count: self.expenses.len(),
            within_plan: spent <= self.planned_amount,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} (planned: {})",
            self.start_date, self.end_date, self.planned_amount
        )
    }
}

/// Point-in-time summary of a budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub start_date: String,
    pub end_date: String,
    pub planned: f64,
    pub spent: f64,
    /// planned - spent
    pub remaining: f64,
    pub expense_count: usize,
    pub within_plan: bool,
}

/// Validation errors for budget input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingStartDate,
    MissingEndDate,
    /// Planned amount is not a number, or not greater than zero
    NonPositivePlannedAmount(String),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartDate => write!(f, "start date cannot be empty"),
            Self::MissingEndDate => write!(f, "end date cannot be empty"),
            Self::NonPositivePlannedAmount(amount) => write!(
                f,
                "planned amount must be a number greater than zero (got '{}')",
                amount
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
