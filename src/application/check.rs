//! Check Use Case
//!
//! This module defines the `CheckUseCase` which loads entities from a record
//! store and runs the reconciler over them.

use std::collections::HashMap;

use crate::domain::entities::EntityKind;
use crate::domain::ports::EntityRepository;
use crate::error::{ReconError, ReconResult};

use super::reconcile::{BulkReport, EntityFailure, EntityReport, Reconciler};

/// Check use case - reconcile stored servers and clusters
pub struct CheckUseCase<R>
where
    R: EntityRepository,
{
    repository: R,
    reconciler: Reconciler,
}

impl<R> CheckUseCase<R>
where
    R: EntityRepository,
{
    pub fn new(repository: R, reconciler: Reconciler) -> Self {
        Self {
            repository,
            reconciler,
        }
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    /// Report on one entity. An unknown id is a store error.
    pub fn check_one(&self, kind: EntityKind, id: &str) -> ReconResult<EntityReport> {
        let entity = self.repository.get(kind, id)?;
        tracing::debug!(%kind, id, sources = entity.sources.len(), "loaded entity");
        self.reconciler.reconcile(&entity)
    }

    /// Report on every entity of a kind.
    ///
    /// Fails only when the store itself cannot be listed. Documents that
    /// fail to load and entities that fail to reconcile land in
    /// [`BulkReport::errors`], in store order.
    pub fn check_all(&self, kind: EntityKind) -> ReconResult<BulkReport> {
        let listed = self.repository.list(kind)?;

        let mut position = HashMap::with_capacity(listed.len());
        let mut entities = Vec::with_capacity(listed.len());
        let mut unreadable = Vec::new();
        for (index, item) in listed.into_iter().enumerate() {
            match item {
                Ok(entity) => {
                    position.entry(entity.id.clone()).or_insert(index);
                    entities.push(entity);
                }
                Err(failed) => {
                    position.entry(failed.id.clone()).or_insert(index);
                    unreadable.push(EntityFailure::new(
                        &failed.id,
                        kind,
                        &ReconError::Store(failed.error),
                    ));
                }
            }
        }
        tracing::debug!(%kind, count = entities.len(), unreadable = unreadable.len(), "loaded entities");

        let mut bulk = self.reconciler.reconcile_all(&entities);
        if !unreadable.is_empty() {
            bulk.errors.extend(unreadable);
            bulk.errors
                .sort_by_key(|f| position.get(&f.entity_id).copied().unwrap_or(usize::MAX));
        }
        Ok(bulk)
    }
}
