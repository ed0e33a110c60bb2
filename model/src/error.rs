//! Error types for model construction and checked field access.

use grom_core::ValidationError;
use thiserror::Error;

/// Errors that can occur building a model or accessing its fields.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Property name does not match the identifier pattern.
    #[error("Invalid property name: {0:?}")]
    InvalidPropertyName(String),

    /// Property declared more than once on the same model.
    #[error("Duplicate property: {0}")]
    DuplicateProperty(String),

    /// Persisted key mapped by more than one property.
    #[error("Duplicate persisted key: {0}")]
    DuplicateDbKey(String),

    /// Property not declared on this model.
    #[error("Unknown property: {property} on model {model}")]
    UnknownProperty { model: String, property: String },

    /// Persisted key not mapped to any property of this model.
    #[error("Unknown persisted key: {key} on model {model}")]
    UnknownDbKey { model: String, key: String },

    /// A raw value failed coercion to its declared type.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
