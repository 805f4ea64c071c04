//! Inconsistency Reporter
//!
//! Runs the comparator over every unified group and assembles one report
//! entry per group, in group order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::policies::ProfileRegistry;
use crate::domain::value_objects::NetworkType;

use super::{compare, FieldDetail, UnifiedGroups};

/// Findings for one identity key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InconsistencyReport {
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: NetworkType,
    pub key: String,
    pub sources: Vec<String>,
    pub details: Vec<FieldDetail>,
}

impl InconsistencyReport {
    pub fn has_findings(&self) -> bool {
        !self.details.is_empty()
    }

    pub fn mismatch_count(&self) -> usize {
        self.details.iter().filter(|d| d.is_mismatch()).count()
    }

    pub fn missing_count(&self) -> usize {
        self.details.iter().filter(|d| d.is_missing()).count()
    }
}

/// How groups are selected for the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Keep groups without findings
    pub include_empty: bool,
    /// Only report these network types (`None` = every type)
    pub types: Option<BTreeSet<NetworkType>>,
}

impl ReportOptions {
    fn selects(&self, network_type: NetworkType) -> bool {
        self.types
            .as_ref()
            .map_or(true, |types| types.contains(&network_type))
    }
}

/// Build the report entries for one entity's groups.
///
/// Groups whose type has no registered profile are not compared; they only
/// show up (with no details) when `include_empty` is set.
pub fn report(
    entity_id: &str,
    groups: &UnifiedGroups,
    profiles: &ProfileRegistry,
    options: &ReportOptions,
) -> Vec<InconsistencyReport> {
    let entries: Vec<InconsistencyReport> = groups
        .iter()
        .filter(|g| options.selects(g.network_type()))
        .map(|g| InconsistencyReport {
            name: g.name().to_string(),
            network_type: g.network_type(),
            key: g.key().to_string(),
            sources: g.labels(),
            details: profiles
                .profile_for(g.network_type())
                .map(|profile| compare(g, profile))
                .unwrap_or_default(),
        })
        .filter(|entry| options.include_empty || entry.has_findings())
        .collect();

    tracing::debug!(
        entity = entity_id,
        groups = groups.len(),
        entries = entries.len(),
        "built inconsistency report"
    );

    entries
}
