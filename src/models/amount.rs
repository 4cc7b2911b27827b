//! Raw expense amounts
//!
//! Amounts are kept exactly as the caller supplied them. A number is a
//! number; text is only interpreted when something asks for its value, so an
//! expense can hold a value that never passes validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount as supplied by the caller: either a number or unparsed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Build an amount from user input, keeping numeric text as a number
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Amount;
    /// assert_eq!(Amount::from_input("12.5"), Amount::Number(12.5));
    /// assert_eq!(Amount::from_input("lots"), Amount::Text("lots".into()));
    /// ```
    pub fn from_input(input: &str) -> Self {
        match input.trim().parse::<f64>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Text(input.to_string()),
        }
    }

    /// Numeric value, converting text when it parses as a float
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Numeric value only when the amount was supplied as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Value used for sums; text that is not numeric counts as zero
    pub fn value(&self) -> f64 {
        self.to_number().unwrap_or(0.0)
    }

    /// Check if the amount converts to a finite number greater than zero
    pub fn is_positive(&self) -> bool {
        self.to_number().is_some_and(is_positive_number)
    }

    /// Check if the amount was supplied as a finite number greater than zero
    pub fn is_strictly_positive(&self) -> bool {
        self.as_number().is_some_and(is_positive_number)
    }
}

fn is_positive_number(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for Amount {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
