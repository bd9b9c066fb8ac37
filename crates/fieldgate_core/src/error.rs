//! Error types for field validation.
//!
//! All validation failures surface synchronously at the point of assignment
//! and propagate to the caller unmodified; nothing is caught or retried
//! inside the crate.

use thiserror::Error;

/// Result type for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised by descriptors and validators.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Value's runtime type is not the required integer type
    #[error("field '{field}' requires an integer, got {actual}")]
    NotInteger { field: String, actual: &'static str },

    /// Integer outside the declared inclusive bounds
    #[error("field '{field}' must be between {min} and {max} inclusive, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Value not in the declared allowed set
    #[error("field '{field}' must be one of [{options}], got '{value}'")]
    NotAllowed {
        field: String,
        value: String,
        options: String,
    },

    /// Field read before any successful write
    #[error("field '{field}' has not been set")]
    Unset { field: String },
}

impl FieldError {
    /// Creates a new non-integer type error.
    pub fn not_integer(field: impl Into<String>, actual: &'static str) -> Self {
        Self::NotInteger {
            field: field.into(),
            actual,
        }
    }

    /// Creates a new out-of-range error.
    pub fn out_of_range(field: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        }
    }

    /// Creates a new not-allowed error, rendering the options in declaration order.
    pub fn not_allowed(
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[String],
    ) -> Self {
        Self::NotAllowed {
            field: field.into(),
            value: value.into(),
            options: options.join(", "),
        }
    }

    /// Creates a new unset-field error.
    pub fn unset(field: impl Into<String>) -> Self {
        Self::Unset {
            field: field.into(),
        }
    }
}
