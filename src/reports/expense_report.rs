//! Expense Report
//!
//! Aggregates expenses by category name, keeping categories in the order
//! they are first seen.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::config::settings::{Settings, DEFAULT_REPORT_HEADER};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category name as stored on the expenses
    pub category: String,
    /// Sum of the expense amounts
    pub total: f64,
    /// Number of expenses
    pub count: usize,
}

/// A report over a borrowed list of expenses
#[derive(Debug, Clone)]
pub struct Report<'a> {
    expenses: &'a [Expense],
    header: String,
    currency_symbol: String,
}

impl<'a> Report<'a> {
    /// Create a report with the default header and `$` symbol
    pub fn new(expenses: &'a [Expense]) -> Self {
        Self {
            expenses,
            header: DEFAULT_REPORT_HEADER.to_string(),
            currency_symbol: "$".to_string(),
        }
    }

    /// Create a report using the labels from `settings`
    pub fn with_settings(expenses: &'a [Expense], settings: &Settings) -> Self {
        Self {
            expenses,
            header: settings.report_header.clone(),
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// Sum expenses per category, in first-seen order
    pub fn generate_report(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for expense in self.expenses {
            match index.get(expense.category.as_str()) {
                Some(&i) => {
                    totals[i].total += expense.amount.value();
                    totals[i].count += 1;
                }
                None => {
                    index.insert(&expense.category, totals.len());
                    totals.push(CategoryTotal {
                        category: expense.category.clone(),
                        total: expense.amount.value(),
                        count: 1,
                    });
                }
            }
        }

        totals
    }

    /// Render the header followed by one `category: $amount` line per category
    pub fn generate_text_report(&self) -> String {
        let mut output = format!("{}\n", self.header);

        for row in self.generate_report() {
            output.push_str(&format!(
                "{}: {}{}\n",
                row.category, self.currency_symbol, row.total
            ));
        }

        output
    }

    /// Sum across every category
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount.value()).sum()
    }

    /// Export the category totals as CSV (`category,total,count`)
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for row in self.generate_report() {
            csv_writer
                .serialize(&row)
                .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| TrackerError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(200, "2024-04-05", "Одяг", "Штани"),
            Expense::new(150, "2024-04-10", "Їжа", "Обід"),
            Expense::new(50, "2024-04-15", "Транспорт", "Таксі"),
        ]
    }

    #[test]
    fn test_generate_report_keeps_first_seen_order() {
        let expenses = sample_expenses();
        let report = Report::new(&expenses);
        let totals = report.generate_report();

        let pairs: Vec<(&str, f64)> = totals
            .iter()
            .map(|t| (t.category.as_str(), t.total))
            .collect();
        assert_eq!(
            pairs,
            vec![("Одяг", 200.0), ("Їжа", 150.0), ("Транспорт", 50.0)]
        );
    }

    #[test]
    fn test_generate_report_accumulates() {
        let expenses = vec![
            Expense::new(10, "d", "Food", ""),
            Expense::new(5, "d", "Travel", ""),
            Expense::new(2.5, "d", "Food", ""),
        ];
        let totals = Report::new(&expenses).generate_report();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total, 12.5);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].category, "Travel");
    }

    #[test]
    fn test_text_report() {
        let expenses = sample_expenses();
        let text = Report::new(&expenses).generate_text_report();

        assert_eq!(
            text,
            "Expense report:\nОдяг: $200\nЇжа: $150\nТранспорт: $50\n"
        );
    }

    #[test]
    fn test_text_report_with_settings() {
        let expenses = vec![Expense::new(12.5, "d", "Food", "")];
        let settings = Settings {
            currency_symbol: "€".into(),
            report_header: "Spending:".into(),
            ..Settings::default()
        };

        let text = Report::with_settings(&expenses, &settings).generate_text_report();
        assert_eq!(text, "Spending:\nFood: €12.5\n");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new(&[]);
        assert!(report.generate_report().is_empty());
        assert_eq!(report.generate_text_report(), "Expense report:\n");
        assert_eq!(report.total(), 0.0);
    }

    #[test]
    fn test_export_csv() {
        let expenses = vec![
            Expense::new(200, "d", "Clothing, shoes", ""),
            Expense::new(50, "d", "Transport", ""),
        ];
        let mut buffer = Vec::new();
        Report::new(&expenses).export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert_eq!(
            csv,
            "category,total,count\n\"Clothing, shoes\",200.0,1\nTransport,50.0,1\n"
        );
    }
}
