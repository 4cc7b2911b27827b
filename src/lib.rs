//! Expense Tracker - in-memory personal expense tracking
//!
//! Records expenses against user-defined categories, checks spending against
//! a single planned budget, and produces per-category reports. Nothing is
//! persisted; state lives in an [`ExpenseManager`] owned by the caller.
//!
//! # Architecture
//!
//! - `models`: entities (`Expense`, `Category`, `Budget`) and raw `Amount`s
//! - `services`: the `ExpenseManager` that validates and owns everything
//! - `reports`: category aggregation and text/CSV rendering
//! - `display`: terminal tables
//! - `export`: CSV, JSON and YAML output
//! - `config`: settings and config paths
//! - `cli`: command handlers, script runner and walkthrough
//!
//! # Example
//!
//! ```
//! use expense_tracker::ExpenseManager;
//!
//! let mut manager = ExpenseManager::new();
//! manager.add_category("Clothing", "Buying clothes");
//! manager.create_budget("2024-04-01", "2024-04-30", 1000).unwrap();
//!
//! let expense = manager.add_expense(200, "2024-04-05", "Clothing", "Trousers").unwrap();
//! assert!(manager.add_expense(150, "2024-04-10", "Food", "Lunch").is_err());
//!
//! manager.add_expense_to_budget(expense).unwrap();
//! assert!(manager.budget().unwrap().plan_budget());
//! assert_eq!(manager.generate_report(), "Expense report:\nClothing: $200\n");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{TrackerError, TrackerResult};
pub use services::ExpenseManager;
