//! CSV Export functionality
//!
//! Exports expense lists in a spreadsheet-friendly layout.

use serde::Serialize;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    date: &'a str,
    category: &'a str,
    amount: String,
    description: &'a str,
}

/// Export expenses to CSV (`date,category,amount,description`)
pub fn export_expenses_csv<'a, I, W>(expenses: I, writer: &mut W) -> TrackerResult<()>
where
    I: IntoIterator<Item = &'a Expense>,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Header is written explicitly so an empty export still has one
    csv_writer
        .write_record(["date", "category", "amount", "description"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in expenses {
        let record = ExpenseRecord {
            date: &expense.date,
            category: &expense.category,
            amount: expense.amount.to_string(),
            description: &expense.description,
        };
        csv_writer
            .serialize(record)
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_expenses_csv() {
        let expenses = vec![
            Expense::new(200, "2024-04-05", "Clothing", "Trousers, blue"),
            Expense::new(12.5, "2024-04-06", "Food", "Lunch"),
        ];
        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv,
            "date,category,amount,description\n\
             2024-04-05,Clothing,200,\"Trousers, blue\"\n\
             2024-04-06,Food,12.5,Lunch\n"
        );
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut buffer = Vec::new();
        export_expenses_csv(Vec::<&Expense>::new(), &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "date,category,amount,description\n"
        );
    }
}
