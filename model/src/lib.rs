//! Entity models for GROM.
//!
//! Runtime schema lookup for one entity type. A [`Model`] is the single
//! source of truth for the type's property descriptors and its persisted
//! name mapping; it is immutable after construction via [`ModelBuilder`].
//! Per-instance values live in each [`Instance`]'s own slots.

mod builder;
mod error;
mod instance;
mod model;

pub use builder::ModelBuilder;
pub use error::{ModelError, ModelResult};
pub use instance::Instance;
pub use model::Model;
