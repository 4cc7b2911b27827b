//! Display formatting for terminal output

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::format_budget_status;
pub use category::format_category_list;
pub use expense::format_expense_list;
