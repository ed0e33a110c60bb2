//! Typed properties for GROM entities.
//!
//! A field is declared with a [`PropertyDef`], bound to its name as a
//! [`PropertyDescriptor`] when the owning model is built, and accessed
//! through the descriptor from then on. Coercion of raw input is
//! delegated to the field's [`DataType`].

mod data_type;
mod definition;
mod descriptor;

pub use data_type::DataType;
pub use definition::PropertyDef;
pub use descriptor::{PropertyDescriptor, SlotStorage};
