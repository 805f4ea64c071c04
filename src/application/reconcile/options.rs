//! Reconcile options

use std::collections::BTreeSet;

use crate::domain::services::ReportOptions;
use crate::domain::value_objects::NetworkType;

/// Default worker bound for bulk reports
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Options for reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Single-entity mode: keep groups without findings in the report
    pub return_all: bool,
    /// Only compare these network types (`None` = every type)
    pub types: Option<BTreeSet<NetworkType>>,
    /// Upper bound on worker threads for bulk reports
    pub concurrency: usize,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            return_all: false,
            types: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_return_all(mut self, return_all: bool) -> Self {
        self.return_all = return_all;
        self
    }

    /// Restrict to `types`; an empty list means every type
    pub fn with_types<I: IntoIterator<Item = NetworkType>>(mut self, types: I) -> Self {
        let types: BTreeSet<NetworkType> = types.into_iter().collect();
        self.types = (!types.is_empty()).then_some(types);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub(crate) fn report_options(&self, include_empty: bool) -> ReportOptions {
        ReportOptions {
            include_empty,
            types: self.types.clone(),
        }
    }
}
