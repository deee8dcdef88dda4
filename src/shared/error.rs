//! Shared Error Types
//!
//! This module defines the validation error raised when a record violates
//! a field constraint (length, URL or email syntax, required value).
//!
//! # Usage
//!
//! ```rust
//! use newsrv::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "must be between 2 and 30 characters");
//! assert_eq!(error.field(), "name");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
