//! # Error Types
//!
//! Structured error types for roi_core. The engine itself is infallible;
//! these errors come from the boundary around it: input validation,
//! scenario files and export writing.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::errors::{RoiError, RoiResult};
//!
//! fn validate_rate(hourly: f64) -> RoiResult<()> {
//!     if hourly < 0.0 {
//!         return Err(RoiError::invalid_input(
//!             "hr_hourly",
//!             hourly.to_string(),
//!             "Hourly cost must be non-negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_rate(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roi_core operations
pub type RoiResult<T> = Result<T, RoiError>;

/// Structured error type for ROI operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RoiError {
    /// An input value is invalid (negative, NaN, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Scenario schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl RoiError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        RoiError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        RoiError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        RoiError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Field name for input errors, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            RoiError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RoiError::InvalidInput { .. } => "INVALID_INPUT",
            RoiError::FileError { .. } => "FILE_ERROR",
            RoiError::SerializationError { .. } => "SERIALIZATION_ERROR",
            RoiError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for RoiError {
    fn from(e: serde_json::Error) -> Self {
        RoiError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RoiError::invalid_input("employees", "0", "Employee count must be at least 1");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: RoiError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RoiError::invalid_input("a", "b", "c").error_code(), "INVALID_INPUT");
        assert_eq!(RoiError::file_error("open", "x.json", "missing").error_code(), "FILE_ERROR");
        assert_eq!(RoiError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        let mismatch = RoiError::VersionMismatch {
            file_version: "1.0.0".to_string(),
            expected_version: "0.1.0".to_string(),
        };
        assert_eq!(mismatch.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_every_variant_roundtrips_through_json() {
        let errors = [
            RoiError::invalid_input("profile.employees", "0", "At least one employee is required"),
            RoiError::file_error("read", "acme.json", "not found"),
            RoiError::serialization("expected value at line 1 column 1"),
            RoiError::VersionMismatch {
                file_version: "0.9.0".to_string(),
                expected_version: "0.1.0".to_string(),
            },
        ];
        for error in errors {
            let json = serde_json::to_value(&error).unwrap();
            assert!(json["type"].is_string());
            let back: RoiError = serde_json::from_value(json).unwrap();
            assert_eq!(back, error);
        }
    }

    #[test]
    fn test_field_accessor() {
        let error = RoiError::invalid_input("hr_hourly", "-1", "negative");
        assert_eq!(error.field(), Some("hr_hourly"));
        assert_eq!(RoiError::serialization("x").field(), None);
    }

    #[test]
    fn test_display_message() {
        let error = RoiError::file_error("write", "out.csv", "permission denied");
        assert_eq!(error.to_string(), "File error: write on 'out.csv' - permission denied");
    }
}
