//! Service layer
//!
//! The [`ExpenseManager`] is the single entry point for mutating tracker
//! state.

pub mod manager;

pub use manager::ExpenseManager;
