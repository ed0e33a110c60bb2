//! The per-entity-type descriptor arena.

use crate::error::{ModelError, ModelResult};
use crate::instance::Instance;
use grom_core::{Value, ValueMap};
use grom_property::{PropertyDescriptor, SlotStorage};
use std::collections::BTreeMap;

/// Immutable schema for one entity type.
///
/// Owns exactly one [`PropertyDescriptor`] per declared field, plus the
/// mapping from user-visible property names to persisted keys. Built once
/// by [`ModelBuilder`](crate::ModelBuilder) at definition time and shared
/// for the life of the entity type; all per-instance state lives in
/// [`Instance`] slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    label: String,
    descriptors: BTreeMap<String, PropertyDescriptor>,
    mapping: BTreeMap<String, String>,
    reverse: BTreeMap<String, String>,
}

impl Model {
    pub(crate) fn new(
        label: String,
        descriptors: BTreeMap<String, PropertyDescriptor>,
        mapping: BTreeMap<String, String>,
        reverse: BTreeMap<String, String>,
    ) -> Self {
        Self {
            label,
            descriptors,
            mapping,
            reverse,
        }
    }

    /// The entity type's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Look up the descriptor for a property name.
    pub fn descriptor(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.get(name)
    }

    /// Iterate over all descriptors in property-name order.
    pub fn descriptors(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.descriptors.values()
    }

    /// Iterate over declared property names.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    /// Type-level metadata read: the persisted key for a property name.
    ///
    /// This answers schema questions about the type itself, as opposed to
    /// reading a value off an instance.
    pub fn db_name(&self, name: &str) -> Option<&str> {
        self.mapping.get(name).map(String::as_str)
    }

    /// Read a field from an instance through its descriptor.
    ///
    /// `Ok(None)` means the field is declared but currently absent and
    /// has no default.
    pub fn get(&self, instance: &Instance, name: &str) -> ModelResult<Option<Value>> {
        let descriptor = self.require(name)?;
        Ok(descriptor.get(instance))
    }

    /// Write a field on an instance through its descriptor.
    ///
    /// Coercion failures propagate unchanged; the instance is not touched
    /// on failure.
    pub fn set(
        &self,
        instance: &mut Instance,
        name: &str,
        raw: impl Into<Value>,
    ) -> ModelResult<()> {
        let descriptor = self.require(name)?;
        descriptor.set(instance, raw)?;
        Ok(())
    }

    /// Delete a field from an instance, returning the removed value.
    ///
    /// A no-op returning `Ok(None)` when the field holds no stored value.
    pub fn delete(&self, instance: &mut Instance, name: &str) -> ModelResult<Option<Value>> {
        let descriptor = self.require(name)?;
        Ok(descriptor.delete(instance))
    }

    /// Convert an instance into its persisted form.
    ///
    /// Every field observable through `get` (stored or defaulted) is
    /// converted with its type's `to_db` and keyed by its persisted name;
    /// absent fields are omitted.
    pub fn dehydrate(&self, instance: &Instance) -> ValueMap {
        let mut values = ValueMap::new();
        for (name, descriptor) in &self.descriptors {
            if let Some(value) = descriptor.get(instance) {
                let key = self.mapping.get(name).cloned().unwrap_or_else(|| name.clone());
                values.insert(key, descriptor.to_db(value));
            }
        }
        values
    }

    /// Rebuild an instance from its persisted form.
    ///
    /// Stored values are trusted; each is converted with its type's
    /// `from_db` and placed directly in the field's slot. Keys that map
    /// to no declared property are rejected.
    pub fn hydrate(&self, values: ValueMap) -> ModelResult<Instance> {
        let mut instance = Instance::new();
        for (key, value) in values {
            let name = self.reverse.get(&key).ok_or_else(|| ModelError::UnknownDbKey {
                model: self.label.clone(),
                key: key.clone(),
            })?;
            // Declared names always carry a descriptor; the builder keeps
            // mapping and descriptors in lockstep.
            if let Some(descriptor) = self.descriptors.get(name) {
                instance.put_slot(descriptor.storage_slot(), descriptor.from_db(value));
            }
        }
        Ok(instance)
    }

    fn require(&self, name: &str) -> ModelResult<&PropertyDescriptor> {
        self.descriptors
            .get(name)
            .ok_or_else(|| ModelError::UnknownProperty {
                model: self.label.clone(),
                property: name.to_string(),
            })
    }
}
