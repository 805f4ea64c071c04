//! Stored entity documents
//!
//! On-disk shape of server and cluster records. Network lists stay raw;
//! they are parsed only when an entity is reconciled.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::{lenient_timestamp, Entity, EntityKind, RawNetwork, Source};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServerDocument {
    server_id: String,
    #[serde(default)]
    cluster_id: Option<String>,
    #[serde(default)]
    env_config: Option<String>,
    #[serde(default)]
    networks: Option<Vec<RawNetwork>>,
    #[serde(default)]
    sources: Option<BTreeMap<String, Source>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    last_updated: Option<DateTime<Utc>>,
    /// hostname, serial_number, rack, owner, additional_info, ...
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ClusterDocument {
    #[serde(default)]
    cluster_id: Option<String>,
    #[serde(default)]
    env_config: Option<String>,
    #[serde(default)]
    networks: Option<Vec<RawNetwork>>,
    #[serde(default)]
    sources: Option<BTreeMap<String, Source>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    last_updated: Option<DateTime<Utc>>,
    /// owners, cilium_cluster_id, additional_info, ...
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

/// Fill whichever of `cluster_id`/`env_config` is missing from the other
fn mirror_cluster_ids(
    cluster_id: Option<String>,
    env_config: Option<String>,
) -> (Option<String>, Option<String>) {
    match (cluster_id, env_config) {
        (Some(id), None) => (Some(id.clone()), Some(id)),
        (None, Some(env)) => (Some(env.clone()), Some(env)),
        pair => pair,
    }
}

fn insert_opt(attributes: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        attributes.insert(key.to_string(), Value::String(value));
    }
}

impl From<ServerDocument> for Entity {
    fn from(doc: ServerDocument) -> Self {
        let (cluster_id, env_config) = mirror_cluster_ids(doc.cluster_id, doc.env_config);
        let mut attributes = doc.attributes;
        insert_opt(&mut attributes, "cluster_id", cluster_id);
        insert_opt(&mut attributes, "env_config", env_config);

        Entity {
            id: doc.server_id,
            kind: EntityKind::Server,
            networks: doc.networks,
            sources: doc.sources.unwrap_or_default(),
            attributes,
            last_updated: doc.last_updated,
        }
    }
}

impl TryFrom<ClusterDocument> for Entity {
    type Error = String;

    fn try_from(doc: ClusterDocument) -> Result<Self, Self::Error> {
        let (cluster_id, env_config) = mirror_cluster_ids(doc.cluster_id, doc.env_config);
        let Some(id) = cluster_id.clone() else {
            return Err("cluster document needs 'cluster_id' or 'env_config'".to_string());
        };

        let mut attributes = doc.attributes;
        insert_opt(&mut attributes, "env_config", env_config);

        Ok(Entity {
            id,
            kind: EntityKind::Cluster,
            networks: doc.networks,
            sources: doc.sources.unwrap_or_default(),
            attributes,
            last_updated: doc.last_updated,
        })
    }
}
