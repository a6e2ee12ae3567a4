//! # Error Types
//!
//! Structured error types for quilt_core. The engine itself only ever fails
//! with [`CalcError::InvalidDimension`]; the remaining variants belong to the
//! materials list and its storage.
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_in: f64) -> CalcResult<()> {
//!     if !(width_in > 0.0) {
//!         return Err(CalcError::invalid_dimension(
//!             "width_in",
//!             width_in.to_string(),
//!             "Please enter valid quilt dimensions",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quilt_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and storage operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A primary dimension is missing, non-numeric, or non-positive.
    ///
    /// The message is meant to be shown to the quilter as-is.
    #[error("{reason} ({field} = {value})")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// Material list item not found
    #[error("Material not found: {id}")]
    MaterialNotFound { id: String },

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

    /// Schema version mismatch
    #[error("Version mismatch: stored version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(id: impl Into<String>) -> Self {
        CalcError::MaterialNotFound { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// True for errors caused by what the user typed, as opposed to storage failures.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::InvalidDimension { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDimension { .. } => "INVALID_DIMENSION",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_dimension("width_in", "-5", "Please enter valid quilt dimensions");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidDimension\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_display_is_user_facing() {
        let error = CalcError::invalid_dimension("length_in", "NaN", "Please enter valid quilt dimensions");
        assert_eq!(error.to_string(), "Please enter valid quilt dimensions (length_in = NaN)");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::material_not_found("42").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert!(CalcError::invalid_dimension("w", "0", "r").is_input_error());
        assert!(!CalcError::file_error("read", "x", "y").is_input_error());
    }
}
