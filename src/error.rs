//! Custom error types for the expense tracker
//!
//! Every manager operation reports failure through [`TrackerError`] instead of
//! printing, so callers and tests can assert on outcomes directly.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Expense rejected by the manager (bad amount, empty date, unknown category)
    #[error("Invalid expense data: {0}")]
    InvalidExpenseData(String),

    /// Budget rejected by the manager (missing dates, bad planned amount)
    #[error("Invalid budget data: {0}")]
    InvalidBudgetData(String),

    /// An expense was attached to the budget before one was created
    #[error("No budget created yet")]
    NoBudgetDefined,

    /// A category with this name already exists
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// No category with this name exists
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// A script line could not be parsed or executed
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },
}

impl TrackerError {
    /// Create a script error for the given 1-based line number
    pub fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }

    /// Check if this is an input validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidExpenseData(_) | Self::InvalidBudgetData(_)
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_))
    }

    /// Check if this error came from a manager operation rather than the
    /// surrounding I/O, config or script plumbing
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::InvalidExpenseData(_)
                | Self::InvalidBudgetData(_)
                | Self::NoBudgetDefined
                | Self::DuplicateCategory(_)
                | Self::CategoryNotFound(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");

        assert_eq!(
            TrackerError::NoBudgetDefined.to_string(),
            "No budget created yet"
        );
        assert_eq!(
            TrackerError::DuplicateCategory("Clothing".into()).to_string(),
            "Category already exists: Clothing"
        );
    }

    #[test]
    fn test_script_error() {
        let err = TrackerError::script(3, "unknown command");
        assert_eq!(err.to_string(), "Script error on line 3: unknown command");
        assert!(!err.is_domain());
    }

    #[test]
    fn test_predicates() {
        assert!(TrackerError::InvalidExpenseData("x".into()).is_validation());
        assert!(TrackerError::InvalidBudgetData("x".into()).is_validation());
        assert!(TrackerError::CategoryNotFound("Food".into()).is_not_found());
        assert!(TrackerError::NoBudgetDefined.is_domain());
        assert!(!TrackerError::Io("disk".into()).is_domain());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
