//! Infrastructure entity (server or cluster) and its collector sources

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::is_reserved_label;
use crate::error::{ReconError, ReconResult};

use super::RawNetwork;

/// What kind of infrastructure an entity is
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Server,
    Cluster,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Server => "server",
            EntityKind::Cluster => "cluster",
        }
    }

    /// Directory holding this kind's documents in a record store
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Server => "servers",
            EntityKind::Cluster => "clusters",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network bundle reported by one collector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub networks: Option<Vec<RawNetwork>>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,

    /// Everything else the collector reported; never compared
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Source {
    pub fn new(networks: Vec<RawNetwork>) -> Self {
        Self {
            networks: Some(networks),
            ..Self::default()
        }
    }

    pub fn networks(&self) -> &[RawNetwork] {
        self.networks.as_deref().unwrap_or_default()
    }

    pub fn refresh_last_updated(&mut self, now: DateTime<Utc>) {
        self.last_updated = Some(now);
    }
}

/// A server or cluster with its own authoritative networks and its sources
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
    /// The entity's own network list ("Truth")
    pub networks: Option<Vec<RawNetwork>>,
    pub sources: BTreeMap<String, Source>,
    /// Non-network attributes (hostname, rack, owners, ...)
    pub attributes: Map<String, Value>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Entity {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            networks: None,
            sources: BTreeMap::new(),
            attributes: Map::new(),
            last_updated: None,
        }
    }

    pub fn with_networks(mut self, networks: Vec<RawNetwork>) -> Self {
        self.networks = Some(networks);
        self
    }

    /// Attach a source as-is. The reserved label is only rejected when the
    /// entity is reconciled.
    pub fn with_source(mut self, label: impl Into<String>, source: Source) -> Self {
        self.sources.insert(label.into(), source);
        self
    }

    pub fn truth_networks(&self) -> &[RawNetwork] {
        self.networks.as_deref().unwrap_or_default()
    }

    /// Create a source or replace its network list, stamping it with `now`.
    pub fn upsert_source(
        &mut self,
        label: &str,
        networks: Vec<RawNetwork>,
        now: DateTime<Utc>,
    ) -> ReconResult<()> {
        if is_reserved_label(label) {
            return Err(ReconError::ReservedSourceName);
        }

        let source = self.sources.entry(label.to_string()).or_default();
        source.networks = Some(networks);
        source.refresh_last_updated(now);
        Ok(())
    }
}

/// Accepts RFC 3339 or naive ISO 8601 (read as UTC). Anything else,
/// including an unparseable string, becomes `None`.
pub(crate) fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
