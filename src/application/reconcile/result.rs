//! Reconcile result types

use serde::Serialize;

use crate::domain::entities::EntityKind;
use crate::domain::services::InconsistencyReport;
use crate::error::ReconError;

/// Report for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityReport {
    pub entity_id: String,
    pub kind: EntityKind,
    pub inconsistencies: Vec<InconsistencyReport>,
}

impl EntityReport {
    pub fn has_findings(&self) -> bool {
        self.inconsistencies.iter().any(|i| i.has_findings())
    }

    pub fn mismatch_count(&self) -> usize {
        self.inconsistencies.iter().map(|i| i.mismatch_count()).sum()
    }

    pub fn missing_count(&self) -> usize {
        self.inconsistencies.iter().map(|i| i.missing_count()).sum()
    }
}

/// An entity whose reconciliation failed during a bulk report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityFailure {
    pub entity_id: String,
    pub kind: EntityKind,
    pub error: String,
    /// Caused by malformed source data rather than the environment
    pub client_error: bool,
}

impl EntityFailure {
    pub fn new(entity_id: &str, kind: EntityKind, error: &ReconError) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            kind,
            error: error.to_string(),
            client_error: error.is_client_error(),
        }
    }
}

/// Report across many entities; only entities with findings are listed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    pub reports: Vec<EntityReport>,
    pub errors: Vec<EntityFailure>,
}

impl BulkReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_clean(&self) -> bool {
        self.reports.is_empty() && self.errors.is_empty()
    }

    pub fn mismatch_count(&self) -> usize {
        self.reports.iter().map(EntityReport::mismatch_count).sum()
    }

    pub fn missing_count(&self) -> usize {
        self.reports.iter().map(EntityReport::missing_count).sum()
    }
}
