//! Built-in walkthrough
//!
//! Exercises every manager operation once, including the rejected paths, and
//! prints what happened.

use std::io::Write;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::Expense;
use crate::services::ExpenseManager;

/// Run the walkthrough and return the manager it built
pub fn run_demo<W: Write>(settings: Settings, out: &mut W) -> TrackerResult<ExpenseManager> {
    let mut manager = ExpenseManager::with_settings(settings);

    manager.add_category("Clothing", "Spending on clothes");
    manager.add_category("Travel", "Spending on trips");

    match manager.create_budget("2024-04-01", "2024-04-30", 1000) {
        Ok(budget) => writeln!(out, "Budget created: {}", budget)?,
        Err(err) => writeln!(out, "warning: {}", err)?,
    }

    // Food and Transport were never added, so only the first one is accepted
    let planned = [
        (200, "2024-04-05", "Clothing", "Trousers"),
        (150, "2024-04-10", "Food", "Lunch"),
        (50, "2024-04-15", "Transport", "Taxi"),
    ];
    for (amount, date, category, description) in planned {
        match manager.add_expense(amount, date, category, description) {
            Ok(expense) => writeln!(out, "Recorded expense: {}", expense)?,
            Err(err) => writeln!(out, "warning: {}", err)?,
        }
    }

    if let Some(budget) = manager.budget() {
        if budget.plan_budget() {
            writeln!(out, "Budget is within plan.")?;
        } else {
            writeln!(out, "Budget does not cover the planned expenses.")?;
        }
    }

    let train = Expense::new(300, "2024-04-20", "Travel", "Train tickets");
    match manager.add_expense_to_budget(train) {
        Ok(()) => writeln!(out, "Attached train tickets to the budget.")?,
        Err(err) => writeln!(out, "warning: {}", err)?,
    }

    writeln!(out)?;
    writeln!(out, "{}", manager.generate_report().trim_end())?;
    writeln!(out)?;

    match manager.add_new_category("Entertainment", "Leisure and fun") {
        Ok(category) => writeln!(out, "Added category: {}", category)?,
        Err(err) => writeln!(out, "warning: {}", err)?,
    }

    match manager.update_category_description("Food", "Food and drinks") {
        Ok(()) => writeln!(out, "Updated category: Food")?,
        Err(err) => writeln!(out, "warning: {}", err)?,
    }

    writeln!(out)?;
    writeln!(out, "{}", manager.generate_report().trim_end())?;

    Ok(manager)
}
