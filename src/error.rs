//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure an operator interaction can run into.

use thiserror::Error;

/// Broad category of a [`PayrollError`].
///
/// The categories decide how a failure is reported: validation errors go
/// back to the operator for correction, storage and render errors abort the
/// current operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backing spreadsheet could not be read, written or understood.
    Storage,
    /// Operator input was rejected before anything was persisted.
    Validation,
    /// A salary slip could not be produced.
    Render,
    /// The engine configuration could not be loaded.
    Config,
}

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::{ErrorKind, PayrollError};
///
/// let error = PayrollError::RecordNotFound {
///     code: "E9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee record not found: E9");
/// assert_eq!(error.kind(), ErrorKind::Render);
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The backing file could not be read or written.
    #[error("Failed to access payroll data file '{path}': {message}")]
    StorageIo {
        /// The path of the backing file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The backing file exists but is not a table with the expected columns.
    #[error("Payroll data file '{path}' does not match the expected layout: {message}")]
    SchemaMismatch {
        /// The path of the backing file.
        path: String,
        /// A description of the mismatch.
        message: String,
    },

    /// A field submitted by the operator was missing or out of bounds.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The column name of the offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A salary slip was requested for a code that is not in the table.
    #[error("Employee record not found: {code}")]
    RecordNotFound {
        /// The requested employee code.
        code: String,
    },

    /// The document backend failed while producing a salary slip.
    #[error("Failed to render salary slip: {message}")]
    Render {
        /// A description of the rendering failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PayrollError::StorageIo { .. } | PayrollError::SchemaMismatch { .. } => {
                ErrorKind::Storage
            }
            PayrollError::Validation { .. } => ErrorKind::Validation,
            PayrollError::RecordNotFound { .. } | PayrollError::Render { .. } => {
                ErrorKind::Render
            }
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                ErrorKind::Config
            }
        }
    }

    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        PayrollError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn storage_io(path: impl std::fmt::Display, error: impl std::fmt::Display) -> Self {
        PayrollError::StorageIo {
            path: path.to_string(),
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_io_displays_path_and_message() {
        let error = PayrollError::StorageIo {
            path: "data/payroll.xlsx".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to access payroll data file 'data/payroll.xlsx': permission denied"
        );
    }

    #[test]
    fn test_schema_mismatch_displays_path_and_message() {
        let error = PayrollError::SchemaMismatch {
            path: "data/payroll.xlsx".to_string(),
            message: "column 3 is 'Sex', expected 'Gender'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payroll data file 'data/payroll.xlsx' does not match the expected layout: column 3 is 'Sex', expected 'Gender'"
        );
    }

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = PayrollError::validation("Name", "is required");
        assert_eq!(error.to_string(), "Invalid field 'Name': is required");
    }

    #[test]
    fn test_record_not_found_displays_code() {
        let error = PayrollError::RecordNotFound {
            code: "E404".to_string(),
        };
        assert_eq!(error.to_string(), "Employee record not found: E404");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_kind_groups_variants_into_categories() {
        assert_eq!(
            PayrollError::storage_io("a.xlsx", "disk full").kind(),
            ErrorKind::Storage
        );
        assert_eq!(
            PayrollError::SchemaMismatch {
                path: "a.xlsx".to_string(),
                message: "empty".to_string(),
            }
            .kind(),
            ErrorKind::Storage
        );
        assert_eq!(
            PayrollError::validation("Employee Code", "is required").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            PayrollError::RecordNotFound {
                code: "E1".to_string()
            }
            .kind(),
            ErrorKind::Render
        );
        assert_eq!(
            PayrollError::Render {
                message: "font".to_string()
            }
            .kind(),
            ErrorKind::Render
        );
        assert_eq!(
            PayrollError::ConfigParseError {
                path: "c.yaml".to_string(),
                message: "bad".to_string(),
            }
            .kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::RecordNotFound {
                code: "E1".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
