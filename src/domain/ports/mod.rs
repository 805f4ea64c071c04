//! Ports - interfaces implemented by the infrastructure layer

mod entity_repository;

pub use entity_repository::{EntityRepository, StoreError, UnreadableEntity};
