//! EntityRepository port
//!
//! Read access to stored servers and clusters. Writing entities is the
//! store's business, not the engine's.

use std::path::PathBuf;

use crate::domain::entities::{Entity, EntityKind};

pub trait EntityRepository: Send + Sync {
    /// Load one entity by id
    fn get(&self, kind: EntityKind, id: &str) -> Result<Entity, StoreError>;

    /// Load every entity of a kind, in a stable order.
    ///
    /// The outer error means the collection itself could not be read. A
    /// document that fails to load is returned in place as an
    /// [`UnreadableEntity`] so the remaining entities still come through.
    fn list(&self, kind: EntityKind) -> Result<Vec<Result<Entity, UnreadableEntity>>, StoreError>;
}

/// A stored entity document that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableEntity {
    /// Best-known id (the document's file stem for file stores)
    pub id: String,
    pub error: StoreError,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("failed to access record store: {message}")]
    AccessError { message: String },

    #[error("record store document corrupted: {path}\n  → Details: {message}")]
    Corrupted { path: PathBuf, message: String },
}
