//! Reconciler
//!
//! Runs the unify → compare → report pipeline for one entity, or fans it
//! out across many entities on scoped worker threads.

use std::panic;
use std::thread;

use crate::domain::entities::Entity;
use crate::domain::policies::ProfileRegistry;
use crate::domain::services::{report, unify};
use crate::error::ReconResult;

use super::options::ReconcileOptions;
use super::result::{BulkReport, EntityFailure, EntityReport};

/// Reconciliation engine bound to a profile registry
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    profiles: ProfileRegistry,
    options: ReconcileOptions,
}

impl Reconciler {
    pub fn new(profiles: ProfileRegistry) -> Self {
        Self {
            profiles,
            options: ReconcileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReconcileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    /// Reconcile a single entity.
    ///
    /// Groups without findings are dropped unless `return_all` is set. The
    /// first malformed record or a reserved source label fails the whole
    /// entity.
    pub fn reconcile(&self, entity: &Entity) -> ReconResult<EntityReport> {
        self.reconcile_with(entity, self.options.return_all)
    }

    fn reconcile_with(&self, entity: &Entity, include_empty: bool) -> ReconResult<EntityReport> {
        let groups = unify(entity.networks.as_deref(), &entity.sources)?;
        let inconsistencies = report(
            &entity.id,
            &groups,
            &self.profiles,
            &self.options.report_options(include_empty),
        );

        Ok(EntityReport {
            entity_id: entity.id.clone(),
            kind: entity.kind,
            inconsistencies,
        })
    }

    /// Reconcile many entities.
    ///
    /// Only entities with at least one finding are reported, in input order.
    /// A failing entity is recorded in `errors` and does not stop the rest.
    pub fn reconcile_all(&self, entities: &[Entity]) -> BulkReport {
        let mut bulk = BulkReport::new();
        if entities.is_empty() {
            return bulk;
        }

        let workers = self.options.concurrency.clamp(1, entities.len());
        let batch_size = entities.len().div_ceil(workers);

        let outcomes: Vec<Result<EntityReport, EntityFailure>> = thread::scope(|scope| {
            let handles: Vec<_> = entities
                .chunks(batch_size)
                .map(|batch| {
                    scope.spawn(move || {
                        batch
                            .iter()
                            .map(|entity| self.reconcile_in_bulk(entity))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(outcomes) => outcomes,
                    Err(payload) => panic::resume_unwind(payload),
                })
                .collect()
        });

        for outcome in outcomes {
            match outcome {
                Ok(report) if !report.inconsistencies.is_empty() => bulk.reports.push(report),
                Ok(_) => {}
                Err(failure) => bulk.errors.push(failure),
            }
        }

        tracing::info!(
            entities = entities.len(),
            workers,
            with_findings = bulk.reports.len(),
            failed = bulk.errors.len(),
            "bulk reconciliation finished"
        );

        bulk
    }

    fn reconcile_in_bulk(&self, entity: &Entity) -> Result<EntityReport, EntityFailure> {
        self.reconcile_with(entity, false).map_err(|err| {
            tracing::warn!(entity = %entity.id, kind = %entity.kind, error = %err, "reconciliation failed");
            EntityFailure::new(&entity.id, entity.kind, &err)
        })
    }
}
