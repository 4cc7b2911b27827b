//! Expense manager
//!
//! Owns every category, every expense and at most one budget. All input is
//! validated here before entities are built; rejected operations return a
//! [`TrackerError`] and log a warning, and never mutate state.

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Amount, Budget, BudgetValidationError, Category, Expense, ExpenseValidationError,
};
use crate::reports::Report;

/// Orchestrates categories, expenses and the active budget
#[derive(Debug, Clone, Default)]
pub struct ExpenseManager {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    budget: Option<Budget>,
    settings: Settings,
}

impl ExpenseManager {
    /// Create an empty manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager that renders reports with `settings`
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// All categories, in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All expenses accepted by [`ExpenseManager::add_expense`], in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The active budget, if one has been created
    pub fn budget(&self) -> Option<&Budget> {
        self.budget.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Names of all categories, duplicates included
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    // === Expenses ===

    /// Validate and record a new expense
    pub fn add_expense(
        &mut self,
        amount: impl Into<Amount>,
        date: &str,
        category: &str,
        description: &str,
    ) -> TrackerResult<Expense> {
        let amount = amount.into();

        if let Err(reason) = self.check_expense_data(&amount, date, category) {
            let err = TrackerError::InvalidExpenseData(reason.to_string());
            warn!(%amount, date, category, "{}", err);
            return Err(err);
        }

        let expense = Expense::new(amount, date, category, description);
        self.expenses.push(expense.clone());
        debug!(category, count = self.expenses.len(), "expense recorded");

        Ok(expense)
    }

    /// Check expense input: a positive number, a date, and a known category
    pub fn validate_expense_data(&self, amount: &Amount, date: &str, category: &str) -> bool {
        self.check_expense_data(amount, date, category).is_ok()
    }

    fn check_expense_data(
        &self,
        amount: &Amount,
        date: &str,
        category: &str,
    ) -> Result<(), ExpenseValidationError> {
        // Text is rejected here even when it would parse as a number
        if !amount.is_strictly_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount.to_string()));
        }

        if date.is_empty() {
            return Err(ExpenseValidationError::MissingDate);
        }

        if !self.categories.iter().any(|c| c.name == category) {
            return Err(ExpenseValidationError::UnknownCategory(category.to_string()));
        }

        Ok(())
    }

    /// Expenses whose category matches exactly, in insertion order
    pub fn get_expenses_by_category(&self, category: &str) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    // === Categories ===

    /// Append a category. Duplicate names are allowed on this path.
    pub fn add_category(&mut self, name: &str, description: &str) -> &Category {
        self.categories.push(Category::new(name, description));
        debug!(name, count = self.categories.len(), "category added");
        &self.categories[self.categories.len() - 1]
    }

    /// Append a category unless one with the same name exists
    pub fn add_new_category(&mut self, name: &str, description: &str) -> TrackerResult<&Category> {
        if self.categories.iter().any(|c| c.name == name) {
            let err = TrackerError::DuplicateCategory(name.to_string());
            warn!("{}", err);
            return Err(err);
        }

        Ok(self.add_category(name, description))
    }

    /// Replace the description of the first category named `category_name`
    pub fn update_category_description(
        &mut self,
        category_name: &str,
        new_description: &str,
    ) -> TrackerResult<()> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name == category_name)
            .ok_or_else(|| TrackerError::CategoryNotFound(category_name.to_string()))?;

        category.update_description(new_description);
        debug!(name = category_name, "category description updated");
        Ok(())
    }

    // === Budget ===

    /// Check budget input: both dates present and a positive planned amount
    pub fn validate_budget_data(
        &self,
        start_date: &str,
        end_date: &str,
        planned_amount: &Amount,
    ) -> bool {
        check_budget_data(start_date, end_date, planned_amount).is_ok()
    }

    /// Validate and install a new budget, discarding any previous one
    pub fn create_budget(
        &mut self,
        start_date: &str,
        end_date: &str,
        planned_amount: impl Into<Amount>,
    ) -> TrackerResult<&Budget> {
        let planned_amount = planned_amount.into();

        let planned = match check_budget_data(start_date, end_date, &planned_amount) {
            Ok(planned) => planned,
            Err(reason) => {
                let err = TrackerError::InvalidBudgetData(reason.to_string());
                warn!(start_date, end_date, %planned_amount, "{}", err);
                return Err(err);
            }
        };

        if self.budget.is_some() {
            debug!("replacing existing budget");
        }

        Ok(&*self
            .budget
            .insert(Budget::new(start_date, end_date, planned)))
    }

    /// Attach an expense to the active budget
    pub fn add_expense_to_budget(&mut self, expense: Expense) -> TrackerResult<()> {
        match self.budget.as_mut() {
            Some(budget) => {
                budget.add_expense(expense);
                debug!(count = budget.expenses.len(), "expense attached to budget");
                Ok(())
            }
            None => {
                let err = TrackerError::NoBudgetDefined;
                warn!("{}", err);
                Err(err)
            }
        }
    }

    // === Reporting ===

    /// Report over the recorded expenses, or `None` when there are none
    pub fn report(&self) -> Option<Report<'_>> {
        if self.expenses.is_empty() {
            None
        } else {
            Some(Report::with_settings(&self.expenses, &self.settings))
        }
    }

    /// Text report over the recorded expenses
    pub fn generate_report(&self) -> String {
        match self.report() {
            Some(report) => report.generate_text_report(),
            None => self.settings.empty_report_message.clone(),
        }
    }
}

/// Returns the planned amount as a number when the input is acceptable
fn check_budget_data(
    start_date: &str,
    end_date: &str,
    planned_amount: &Amount,
) -> Result<f64, BudgetValidationError> {
    if start_date.is_empty() {
        return Err(BudgetValidationError::MissingStartDate);
    }

    if end_date.is_empty() {
        return Err(BudgetValidationError::MissingEndDate);
    }

    match planned_amount.as_number() {
        Some(planned) if planned_amount.is_strictly_positive() => Ok(planned),
        _ => Err(BudgetValidationError::NonPositivePlannedAmount(
            planned_amount.to_string(),
        )),
    }
}
