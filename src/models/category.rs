//! Category model
//!
//! Categories are named labels used to classify expenses. Expenses refer to
//! them by name only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category name
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the description
    pub fn update_description(&mut self, new_description: impl Into<String>) {
        self.description = new_description.into();
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Clothing", "Buying clothes");
        assert_eq!(category.name, "Clothing");
        assert_eq!(category.description, "Buying clothes");
        assert_eq!(category.created_at, category.updated_at);
    }

    #[test]
    fn test_update_description() {
        let mut category = Category::new("Travel", "Trips");
        category.update_description("");
        assert_eq!(category.description, "");

        category.update_description("Trains and flights");
        assert_eq!(category.description, "Trains and flights");
        assert_eq!(category.name, "Travel");
        assert!(category.updated_at >= category.created_at);
    }

    #[test]
    fn test_serialization() {
        let category = Category::new("Food", "Groceries and dining");
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
