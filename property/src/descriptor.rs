//! Property descriptors.
//!
//! A descriptor is the runtime binding of a [`PropertyDef`] to a named
//! field on an entity model. There is exactly one descriptor per declared
//! field per model; it mediates every read, write and delete of that
//! field across all instances of the model.

use crate::{DataType, PropertyDef};
use grom_core::{ValidationResult, Value};

/// Storage seam implemented by the owning entity instance.
///
/// Each instance holds zero-or-one value per descriptor, keyed by the
/// descriptor's storage slot. Slots are private to one instance, so this
/// layer needs no synchronization; confining an instance to a single
/// writer at a time is the caller's responsibility.
pub trait SlotStorage {
    /// Read the value stored under a slot, if any.
    fn slot(&self, slot: &str) -> Option<&Value>;

    /// Store a value under a slot, overwriting any prior value.
    fn put_slot(&mut self, slot: &str, value: Value);

    /// Remove and return the value stored under a slot, if any.
    fn take_slot(&mut self, slot: &str) -> Option<Value>;
}

/// Runtime accessor for one typed field across all instances of a model.
///
/// Built once at model-definition time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    property_name: String,
    storage_slot: String,
    data_type: DataType,
    default: Option<Value>,
}

impl PropertyDescriptor {
    /// Bind a definition to a field name.
    ///
    /// The storage slot is the field name prefixed with an underscore.
    /// The model builder rejects property names with a leading
    /// underscore, so a slot can never collide with a visible name.
    pub fn bind(property_name: impl Into<String>, def: &PropertyDef) -> Self {
        let property_name = property_name.into();
        let storage_slot = format!("_{}", property_name);
        Self {
            property_name,
            storage_slot,
            data_type: def.data_type(),
            default: def.default().cloned(),
        }
    }

    /// The user-visible field name.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// The backing slot name on owning instances.
    pub fn storage_slot(&self) -> &str {
        &self.storage_slot
    }

    /// The data type governing this field.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The declared default value, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Read the field from an instance.
    ///
    /// Returns the stored value if one has been written, otherwise the
    /// definition's default unconverted, otherwise `None`.
    pub fn get(&self, owner: &impl SlotStorage) -> Option<Value> {
        owner
            .slot(&self.storage_slot)
            .cloned()
            .or_else(|| self.default.clone())
    }

    /// Write the field on an instance.
    ///
    /// The raw value is coerced first and stored only on success, so a
    /// failed write leaves any previously stored value untouched.
    pub fn set(&self, owner: &mut impl SlotStorage, raw: impl Into<Value>) -> ValidationResult<()> {
        let coerced = self.data_type.coerce(raw.into())?;
        owner.put_slot(&self.storage_slot, coerced);
        Ok(())
    }

    /// Delete the field from an instance, returning the removed value.
    ///
    /// Reverts subsequent reads to the definition's default. Deleting a
    /// field that was never set is a no-op.
    pub fn delete(&self, owner: &mut impl SlotStorage) -> Option<Value> {
        owner.take_slot(&self.storage_slot)
    }

    /// Convert a coerced value into its persisted form.
    pub fn to_db(&self, value: Value) -> Value {
        self.data_type.to_db(value)
    }

    /// Convert a persisted value back into its in-memory form.
    pub fn from_db(&self, value: Value) -> Value {
        self.data_type.from_db(value)
    }
}
