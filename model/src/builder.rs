//! Model construction.

use crate::error::{ModelError, ModelResult};
use crate::model::Model;
use grom_property::{PropertyDef, PropertyDescriptor};
use regex_lite::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

// No leading underscore: storage slots are underscore-prefixed, so this
// keeps user-visible names and backing slots disjoint.
const IDENT_PATTERN: &str = "^[A-Za-z][A-Za-z0-9_]*$";

fn ident_pattern() -> &'static Regex {
    static IDENT: OnceLock<Regex> = OnceLock::new();
    IDENT.get_or_init(|| Regex::new(IDENT_PATTERN).expect("identifier pattern compiles"))
}

/// Builder for a [`Model`].
///
/// Collects one [`PropertyDef`] per field, then binds each definition to
/// its name as a [`PropertyDescriptor`] when `build` is called. Name
/// checks happen at build time so a bad declaration fails the model, not
/// a later field access.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    label: String,
    properties: Vec<(String, String, PropertyDef)>,
}

impl ModelBuilder {
    /// Start a model for the entity type with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            properties: Vec::new(),
        }
    }

    /// Declare a property persisted under its own name.
    pub fn property(self, name: impl Into<String>, def: PropertyDef) -> Self {
        let name = name.into();
        let db_name = name.clone();
        self.push(name, db_name, def)
    }

    /// Declare a property persisted under a different key.
    pub fn property_as(
        self,
        name: impl Into<String>,
        db_name: impl Into<String>,
        def: PropertyDef,
    ) -> Self {
        self.push(name.into(), db_name.into(), def)
    }

    fn push(mut self, name: String, db_name: String, def: PropertyDef) -> Self {
        self.properties.push((name, db_name, def));
        self
    }

    /// Build the immutable model, binding every definition to a
    /// descriptor.
    pub fn build(self) -> ModelResult<Model> {
        let mut descriptors = BTreeMap::new();
        let mut mapping = BTreeMap::new();
        let mut reverse = BTreeMap::new();

        for (name, db_name, def) in self.properties {
            if !ident_pattern().is_match(&name) {
                return Err(ModelError::InvalidPropertyName(name));
            }
            if db_name.is_empty() {
                return Err(ModelError::InvalidPropertyName(db_name));
            }
            if descriptors.contains_key(&name) {
                return Err(ModelError::DuplicateProperty(name));
            }
            if reverse.contains_key(&db_name) {
                return Err(ModelError::DuplicateDbKey(db_name));
            }

            let descriptor = PropertyDescriptor::bind(&name, &def);
            descriptors.insert(name.clone(), descriptor);
            mapping.insert(name.clone(), db_name.clone());
            reverse.insert(db_name, name);
        }

        Ok(Model::new(self.label, descriptors, mapping, reverse))
    }
}
