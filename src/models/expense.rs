//! Expense model
//!
//! An expense is a single spending event. Construction never validates; the
//! `validate_*` methods are advisory and the manager decides what to accept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::amount::Amount;

/// A recorded spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount as supplied by the caller
    pub amount: Amount,

    /// Date token; only checked for presence
    pub date: String,

    /// Name of the category this expense belongs to.
    /// Not kept in sync with the category list after creation.
    pub category: String,

    /// Free text description
    #[serde(default)]
    pub description: String,

    /// When the expense was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense without validating any field
    pub fn new(
        amount: impl Into<Amount>,
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    /// Check that the amount converts to a number greater than zero
    pub fn validate_amount(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check that a date was given
    pub fn validate_date(&self) -> bool {
        !self.date.is_empty()
    }

    /// Check that the category is one of `available_categories`
    pub fn validate_category<S: AsRef<str>>(&self, available_categories: &[S]) -> bool {
        available_categories
            .iter()
            .any(|name| name.as_ref() == self.category)
    }

    /// Run all field checks, reporting the first failure
    pub fn validate<S: AsRef<str>>(
        &self,
        available_categories: &[S],
    ) -> Result<(), ExpenseValidationError> {
        if !self.validate_amount() {
            return Err(ExpenseValidationError::NonPositiveAmount(
                self.amount.to_string(),
            ));
        }

        if !self.validate_date() {
            return Err(ExpenseValidationError::MissingDate);
        }

        if !self.validate_category(available_categories) {
            return Err(ExpenseValidationError::UnknownCategory(
                self.category.clone(),
            ));
        }

        Ok(())
    }

    /// Field map used for display and serialization
    pub fn to_dict(&self) -> Map<String, Value> {
        let amount = match &self.amount {
            Amount::Number(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Amount::Text(text) => Value::String(text.clone()),
        };

        let mut map = Map::new();
        map.insert("amount".into(), amount);
        map.insert("date".into(), Value::String(self.date.clone()));
        map.insert("category".into(), Value::String(self.category.clone()));
        map.insert(
            "description".into(),
            Value::String(self.description.clone()),
        );
        map
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.date, self.amount, self.category)?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    /// Amount is not numeric, or not greater than zero
    NonPositiveAmount(String),
    MissingDate,
    UnknownCategory(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be a number greater than zero (got '{}')", amount)
            }
            Self::MissingDate => write!(f, "date cannot be empty"),
            Self::UnknownCategory(name) => write!(f, "unknown category '{}'", name),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
