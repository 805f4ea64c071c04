//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod documents;
mod fs_entity;

pub use fs_entity::FsEntityRepository;
