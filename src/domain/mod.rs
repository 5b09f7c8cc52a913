//! Domain layer: core entities and store traits.

pub mod mapping;
pub mod store;

pub use mapping::Mapping;
pub use store::{MappingStore, StoreError};
