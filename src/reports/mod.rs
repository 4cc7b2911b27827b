//! Reports module
//!
//! Category-aggregated expense reports in text and CSV form.

pub mod expense_report;

pub use expense_report::{CategoryTotal, Report};
