//! Error types for the contact intake service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-field validation failures live in [`crate::domain::errors`]; they are data,
//! not failures of the request.

use crate::domain::FieldErrors;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the persistence gateway.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Query failed or the database is unreachable
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors that abort a bulk CSV import.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The CSV source does not exist
    #[error("CSV source not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The CSV source exists but could not be opened
    #[error("Failed to open CSV source: {0}")]
    Io(#[from] std::io::Error),

    /// The input has no header row
    #[error("CSV source has no header row")]
    MissingHeader,

    /// The CSV parser failed part-way through the input
    #[error("CSV import failed: {0}")]
    ImportFailed(#[from] csv_async::Error),

    /// Inserting the valid rows failed
    #[error("Failed to store imported rows: {0}")]
    Persistence(#[from] StoreError),
}

/// Errors from the single-record submit path.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more fields failed validation
    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),

    /// The record was valid but could not be stored
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_error_display() {
        let err = ImportError::NotFound(PathBuf::from("data/import.csv"));
        assert_eq!(err.to_string(), "CSV source not found: data/import.csv");

        let err = ConfigError::MissingVar("DATABASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DATABASE_URL"
        );

        let err = StoreError::from(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("Database error: "));
    }

    #[test]
    fn test_submit_error_variants() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "email invalid".to_string());
        let err = SubmitError::Invalid(errors);
        assert_eq!(err.to_string(), "Validation failed for 1 field(s)");

        let err: SubmitError = StoreError::from(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, SubmitError::Persistence(_)));
    }

    #[test]
    fn test_store_error_converts_into_import_error() {
        let err: ImportError = StoreError::from(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, ImportError::Persistence(_)));
    }
}
