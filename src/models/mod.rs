//! Core data models for the expense tracker
//!
//! Plain entities with field-level validators. None of them validate on
//! construction; the manager is the only gatekeeper.

pub mod amount;
pub mod budget;
pub mod category;
pub mod expense;

pub use amount::Amount;
pub use budget::{Budget, BudgetStatus, BudgetValidationError};
pub use category::Category;
pub use expense::{Expense, ExpenseValidationError};
