//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format expenses as a table
pub fn format_expense_list<'a, I>(expenses: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| ExpenseRow {
            date: e.date.clone(),
            category: e.category.clone(),
            amount: format!("{}{}", currency_symbol, e.amount),
            description: e.description.clone(),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
