//! Validation error for the typed-property write path.

use crate::Value;
use thiserror::Error;

/// Raised when a raw value cannot be coerced to a property's declared type.
///
/// Carries the offending value and the logical type name so the caller can
/// produce an actionable message. This is the only failure mode on the
/// write path; reads and deletes are total.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{value} is not a valid {expected}")]
pub struct ValidationError {
    /// The raw value that failed coercion.
    pub value: Value,
    /// Name of the logical type the value was assigned to.
    pub expected: &'static str,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(value: Value, expected: &'static str) -> Self {
        Self { value, expected }
    }
}

/// Result type for value validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
