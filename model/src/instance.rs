//! Per-instance property storage.

use grom_core::Value;
use grom_property::SlotStorage;
use std::collections::HashMap;

/// Property storage for one entity instance.
///
/// Holds zero-or-one value per declared field, keyed by the field's
/// storage slot; a slot is absent until the field is first written. The
/// slots are private to this instance, so concurrent access to different
/// instances needs no coordination. An instance is not internally
/// synchronized; keep it confined to one writer at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    slots: HashMap<String, Value>,
}

impl Instance {
    /// Create an instance with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields that currently hold a stored value.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no field holds a stored value.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStorage for Instance {
    fn slot(&self, slot: &str) -> Option<&Value> {
        self.slots.get(slot)
    }

    fn put_slot(&mut self, slot: &str, value: Value) {
        self.slots.insert(slot.to_string(), value);
    }

    fn take_slot(&mut self, slot: &str) -> Option<Value> {
        self.slots.remove(slot)
    }
}
