//! Data types for property values.
//!
//! A [`DataType`] carries no state; it is the coercion and conversion
//! behaviour attached to a declared field. `coerce` turns raw input into
//! the canonical in-memory value for the type, `to_db`/`from_db` convert
//! between the in-memory value and the persisted form.

use grom_core::{ValidationError, ValidationResult, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    String,
}

impl DataType {
    /// Name of this type, as used in validation error messages.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Bool => "Bool",
            DataType::Int => "Int",
            DataType::Float => "Float",
            DataType::String => "String",
        }
    }

    /// Validate an optional raw value.
    ///
    /// The absent marker passes through untouched: a missing value is
    /// never a validation failure. Present values are coerced.
    pub fn validate(&self, raw: Option<Value>) -> ValidationResult<Option<Value>> {
        match raw {
            None => Ok(None),
            Some(value) => self.coerce(value).map(Some),
        }
    }

    /// Coerce a raw value into the canonical value for this type.
    ///
    /// Coercion is idempotent: coercing an already-coerced value returns
    /// an equal value. Input that cannot be coerced fails with a
    /// [`ValidationError`] naming the offending value.
    pub fn coerce(&self, raw: Value) -> ValidationResult<Value> {
        match self {
            DataType::Bool => coerce_bool(raw),
            DataType::Int => coerce_int(raw),
            DataType::Float => coerce_float(raw),
            DataType::String => coerce_string(raw),
        }
    }

    /// Convert a coerced value into its persisted form.
    ///
    /// The scalar types persist as-is; this hook exists for the session
    /// layer so richer types can map onto a different stored shape.
    pub fn to_db(&self, value: Value) -> Value {
        value
    }

    /// Convert a persisted value back into its in-memory form.
    ///
    /// Inverse of [`DataType::to_db`]: `from_db(to_db(v)) == v` for every
    /// value accepted by [`DataType::coerce`].
    pub fn from_db(&self, value: Value) -> Value {
        value
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn coerce_bool(raw: Value) -> ValidationResult<Value> {
    match raw {
        Value::Bool(b) => Ok(Value::Bool(b)),
        Value::Int(0) => Ok(Value::Bool(false)),
        Value::Int(1) => Ok(Value::Bool(true)),
        Value::String(ref s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(ValidationError::new(raw, DataType::Bool.name())),
        },
        other => Err(ValidationError::new(other, DataType::Bool.name())),
    }
}

fn coerce_int(raw: Value) -> ValidationResult<Value> {
    match raw {
        Value::Int(i) => Ok(Value::Int(i)),
        Value::Bool(b) => Ok(Value::Int(i64::from(b))),
        Value::Float(f) if is_exact_int(f) => Ok(Value::Int(f as i64)),
        Value::String(ref s) => match s.trim().parse::<i64>() {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Err(ValidationError::new(raw, DataType::Int.name())),
        },
        other => Err(ValidationError::new(other, DataType::Int.name())),
    }
}

fn coerce_float(raw: Value) -> ValidationResult<Value> {
    match raw {
        Value::Float(f) => Ok(Value::Float(f)),
        Value::Int(i) => Ok(Value::Float(i as f64)),
        Value::Bool(b) => Ok(Value::Float(if b { 1.0 } else { 0.0 })),
        Value::String(ref s) => match s.trim().parse::<f64>() {
            Ok(f) => Ok(Value::Float(f)),
            Err(_) => Err(ValidationError::new(raw, DataType::Float.name())),
        },
    }
}

fn coerce_string(raw: Value) -> ValidationResult<Value> {
    match raw {
        Value::String(s) => Ok(Value::String(s)),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        Value::Int(i) => Ok(Value::String(i.to_string())),
        Value::Float(f) => Ok(Value::String(f.to_string())),
    }
}

// A float converts to Int only when it is finite, whole, and within i64
// range. Truncating "3.7" into 3 would silently lose data.
fn is_exact_int(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64
}
