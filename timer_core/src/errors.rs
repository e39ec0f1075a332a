//! # Error Types
//!
//! Structured error types for timer_core. Validation failures carry every
//! rejected input at once so a front end can show the whole list, not just
//! the first problem it hit.
//!
//! ## Example
//!
//! ```rust
//! use timer_core::errors::{CalcError, CalcResult};
//!
//! fn validate_delay(delay_s: f64) -> CalcResult<()> {
//!     if delay_s <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "delay_s",
//!             delay_s.to_string(),
//!             "Delay must be between 0 and 10000 seconds",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for timer_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of its accepted range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// One or more inputs were rejected; no result was computed
    #[error("Validation failed: {}", join_reasons(.issues))]
    ValidationFailed { issues: Vec<CalcError> },

    /// Pin number outside the 8-pin DIP package
    #[error("Unknown pin: {pin} (555 timer pins are numbered 1-8)")]
    UnknownPin { pin: u8 },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

fn join_reasons(issues: &[CalcError]) -> String {
    issues
        .iter()
        .flat_map(CalcError::messages)
        .collect::<Vec<_>>()
        .join("; ")
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownPin error
    pub fn unknown_pin(pin: u8) -> Self {
        CalcError::UnknownPin { pin }
    }

    /// User-facing messages, one per rejected input.
    ///
    /// `InvalidInput` yields its bare reason; `ValidationFailed` flattens its
    /// issues in the order they were collected.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CalcError::InvalidInput { reason, .. } => vec![reason.clone()],
            CalcError::ValidationFailed { issues } => issues.iter().flat_map(CalcError::messages).collect(),
            other => vec![other.to_string()],
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::UnknownPin { .. } => "UNKNOWN_PIN",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
