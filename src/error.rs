//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The persisted store (or another file) could not be read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// Persisted content exists but is not a valid expense sequence
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Domain rule violations (negative amounts, blank categories)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed user input such as dates or amounts
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a validation error for a negative amount
    pub fn negative_amount(value: f64) -> Self {
        Self::Validation(format!("Amount cannot be negative: {}", value))
    }

    /// Create a validation error for NaN or infinite amounts
    pub fn non_finite_amount(value: f64) -> Self {
        Self::Validation(format!("Amount must be a finite number: {}", value))
    }

    /// Create a parse error for a malformed date
    pub fn invalid_date(input: impl AsRef<str>, format: &str) -> Self {
        Self::Parse(format!(
            "Invalid date '{}': expected format {}",
            input.as_ref(),
            format
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from reading the persisted store
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Deserialization(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_negative_amount_error() {
        let err = LedgerError::negative_amount(-5.0);
        assert_eq!(err.to_string(), "Validation error: Amount cannot be negative: -5");
        assert!(err.is_validation());
        assert!(!err.is_load_failure());
    }

    #[test]
    fn test_non_finite_amount_error() {
        let err = LedgerError::non_finite_amount(f64::NAN);
        assert_eq!(err.to_string(), "Validation error: Amount must be a finite number: NaN");
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_date_error() {
        let err = LedgerError::invalid_date("2024-13-01", "%Y-%m-%d");
        assert_eq!(
            err.to_string(),
            "Parse error: Invalid date '2024-13-01': expected format %Y-%m-%d"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
        assert!(ledger_err.is_load_failure());
    }
}
