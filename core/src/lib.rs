//! Core value types for GROM.
//!
//! GROM maps typed objects onto a property graph. This crate holds the
//! dynamic [`Value`] exchanged between the typed-property layer and the
//! database session layer, plus the validation error raised when a write
//! cannot be coerced to a field's declared type.

mod error;
mod value;

pub use error::{ValidationError, ValidationResult};
pub use value::{Value, ValueMap};
