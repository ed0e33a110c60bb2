//! Shared fixtures for GROM integration tests.

use grom_model::{Model, ModelBuilder};
use grom_property::PropertyDef;

/// A model exercising every data type, with and without defaults.
pub fn person_model() -> Model {
    ModelBuilder::new("person")
        .property("name", PropertyDef::string())
        .property("age", PropertyDef::int().with_default(0i64))
        .property("score", PropertyDef::float().with_default(0.0))
        .property_as("active", "is_active", PropertyDef::bool())
        .build()
        .expect("person model is well formed")
}

/// Convenience prelude for test files.
pub mod prelude {
    pub use crate::person_model;
    pub use grom_core::{values, ValidationError, Value, ValueMap};
    pub use grom_model::{Instance, Model, ModelBuilder, ModelError};
    pub use grom_property::{DataType, PropertyDef, PropertyDescriptor, SlotStorage};
}
