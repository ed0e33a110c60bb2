//! Declarative property definitions.

use crate::DataType;
use grom_core::Value;

/// Declarative description of one typed field on an entity model.
///
/// A definition pairs a [`DataType`] with an optional default value. It is
/// consumed by the model builder, which replaces it with a bound
/// [`PropertyDescriptor`](crate::PropertyDescriptor); it holds no
/// per-instance state and is immutable after construction.
///
/// The default is trusted as already valid for the declared type; it is
/// handed back unconverted on reads of an unset field.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDef {
    data_type: DataType,
    default: Option<Value>,
}

impl PropertyDef {
    /// Create a definition for an already-constructed data type.
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            default: None,
        }
    }

    /// Create a boolean property definition.
    pub fn bool() -> Self {
        Self::new(DataType::Bool)
    }

    /// Create an integer property definition.
    pub fn int() -> Self {
        Self::new(DataType::Int)
    }

    /// Create a float property definition.
    pub fn float() -> Self {
        Self::new(DataType::Float)
    }

    /// Create a string property definition.
    pub fn string() -> Self {
        Self::new(DataType::String)
    }

    /// Attach a default value, returned by reads before any write.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The data type governing this field.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The default value, if one was declared.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
