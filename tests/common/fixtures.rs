//! Test fixtures - network record builders and entity documents.

use netrecon::{Entity, EntityKind, RawNetwork, Source};
use serde_json::{json, Value};

pub const TEST_MAC: &str = "aa:bb:cc:dd:ee:ff";

/// Parse a JSON array literal into raw network records
pub fn networks(value: Value) -> Vec<RawNetwork> {
    serde_json::from_value(value).expect("fixture must be an array of objects")
}

/// `data` ip network as reported by a healthy collector
pub fn data_ip(ip: &str) -> Value {
    json!({ "name": "data", "type": "ip", "ip": ip, "subnet_mask": "255.255.255.0", "mac": TEST_MAC })
}

/// Server with a Truth list plus named sources
pub fn server_with(truth: Value, sources: &[(&str, Value)]) -> Entity {
    let mut entity = Entity::new(EntityKind::Server, "web-01").with_networks(networks(truth));
    for (label, list) in sources {
        entity = entity.with_source(*label, Source::new(networks(list.clone())));
    }
    entity
}

/// Server document in the on-disk store format
pub fn server_document(id: &str, truth_ip: &str, inventory_ip: &str) -> Value {
    json!({
        "server_id": id,
        "hostname": format!("{id}.dc1"),
        "networks": [data_ip(truth_ip)],
        "sources": {
            "Inventory": {
                "networks": [data_ip(inventory_ip)],
                "last_updated": "2024-05-01T08:00:00Z"
            },
            "MonitoringTool": {
                "networks": [data_ip(truth_ip)]
            }
        }
    })
}

/// Cluster document with a pods cidr network
pub fn cluster_document(id: &str, truth_cidrs: Value, inventory_cidrs: Value) -> Value {
    json!({
        "env_config": id,
        "owners": ["netops"],
        "networks": [{ "name": "pods", "type": "cidr", "cidrs": truth_cidrs }],
        "sources": {
            "Inventory": { "networks": [{ "name": "pods", "type": "cidr", "cidrs": inventory_cidrs }] }
        }
    })
}
