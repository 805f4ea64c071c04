//! Network record entity
//!
//! One network attachment reported by Truth or a collector source. Records
//! arrive as raw JSON maps and are parsed into a closed set of kinds keyed by
//! their `type` discriminator. Only identity is validated; kind-specific
//! fields keep the absent / null / value distinction so the comparator can
//! apply per-field tolerance rules. Keys the kind does not declare are kept
//! too, so a configured profile can compare any reported field.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::value_objects::{IdentityKey, NetworkType, Reported};

/// Unparsed network record as stored in an entity or source document
pub type RawNetwork = Map<String, Value>;

static ABSENT: Reported = Reported::Absent;

/// Why a raw network record was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("network record has no 'type'")]
    MissingDiscriminator,

    #[error("unknown network type '{type_name}'")]
    UnknownNetworkType { type_name: String },

    #[error("{network_type} network record has no 'name'")]
    MissingIdentity { network_type: NetworkType },
}

/// IP attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpNetwork {
    pub name: String,
    pub ip: Reported,
    pub subnet_mask: Reported,
    pub mac: Reported,
    pub other_fields: BTreeMap<String, Reported>,
}

/// Set of CIDR blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrNetwork {
    pub name: String,
    pub cidrs: Reported,
    pub other_fields: BTreeMap<String, Reported>,
}

/// Host subnet with egress allocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSubnetNetwork {
    pub name: String,
    pub hostname: Reported,
    pub egress_cidrs: Reported,
    pub egress_ips: Reported,
    pub other_fields: BTreeMap<String, Reported>,
}

/// A parsed network record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRecord {
    Ip(IpNetwork),
    Cidr(CidrNetwork),
    HostSubnet(HostSubnetNetwork),
}

impl NetworkRecord {
    /// Parse a raw record, dispatching on its `type`.
    ///
    /// The discriminator is checked first, then the identity. Absent
    /// kind-specific fields are legal.
    pub fn parse(raw: &RawNetwork) -> Result<Self, ParseError> {
        let network_type = discriminator(raw)?;
        let name = identity(raw).ok_or(ParseError::MissingIdentity { network_type })?;

        let field = |key: &str| Reported::from_lookup(raw.get(key));
        let other_fields = |declared: &[&str]| -> BTreeMap<String, Reported> {
            raw.iter()
                .filter(|(key, _)| {
                    let key = key.as_str();
                    key != "name" && key != "type" && !declared.contains(&key)
                })
                .map(|(key, value)| (key.clone(), Reported::from_lookup(Some(value))))
                .collect()
        };

        let record = match network_type {
            NetworkType::Ip => NetworkRecord::Ip(IpNetwork {
                name,
                ip: field("ip"),
                subnet_mask: field("subnet_mask"),
                mac: field("mac"),
                other_fields: other_fields(&["ip", "subnet_mask", "mac"]),
            }),
            NetworkType::Cidr => NetworkRecord::Cidr(CidrNetwork {
                name,
                cidrs: field("cidrs"),
                other_fields: other_fields(&["cidrs"]),
            }),
            NetworkType::HostSubnet => NetworkRecord::HostSubnet(HostSubnetNetwork {
                name,
                hostname: field("hostname"),
                egress_cidrs: field("egress_cidrs"),
                egress_ips: field("egress_ips"),
                other_fields: other_fields(&["hostname", "egress_cidrs", "egress_ips"]),
            }),
        };

        Ok(record)
    }

    pub fn name(&self) -> &str {
        match self {
            NetworkRecord::Ip(n) => &n.name,
            NetworkRecord::Cidr(n) => &n.name,
            NetworkRecord::HostSubnet(n) => &n.name,
        }
    }

    pub fn network_type(&self) -> NetworkType {
        match self {
            NetworkRecord::Ip(_) => NetworkType::Ip,
            NetworkRecord::Cidr(_) => NetworkType::Cidr,
            NetworkRecord::HostSubnet(_) => NetworkType::HostSubnet,
        }
    }

    pub fn identity(&self) -> IdentityKey {
        IdentityKey::new(self.name(), self.network_type())
    }

    /// What this record reports for `field`.
    ///
    /// Declared fields first, then any other key the raw record carried.
    /// Keys the record never reported read as absent.
    pub fn field(&self, field: &str) -> &Reported {
        match (self, field) {
            (NetworkRecord::Ip(n), "ip") => &n.ip,
            (NetworkRecord::Ip(n), "subnet_mask") => &n.subnet_mask,
            (NetworkRecord::Ip(n), "mac") => &n.mac,
            (NetworkRecord::Cidr(n), "cidrs") => &n.cidrs,
            (NetworkRecord::HostSubnet(n), "hostname") => &n.hostname,
            (NetworkRecord::HostSubnet(n), "egress_cidrs") => &n.egress_cidrs,
            (NetworkRecord::HostSubnet(n), "egress_ips") => &n.egress_ips,
            _ => self.other_fields().get(field).unwrap_or(&ABSENT),
        }
    }

    fn other_fields(&self) -> &BTreeMap<String, Reported> {
        match self {
            NetworkRecord::Ip(n) => &n.other_fields,
            NetworkRecord::Cidr(n) => &n.other_fields,
            NetworkRecord::HostSubnet(n) => &n.other_fields,
        }
    }
}

/// Scalar names are stringified; lists, objects and null carry no identity.
fn identity(raw: &RawNetwork) -> Option<String> {
    match raw.get("name")? {
        Value::String(name) => Some(name.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn discriminator(raw: &RawNetwork) -> Result<NetworkType, ParseError> {
    match raw.get("type") {
        None | Some(Value::Null) => Err(ParseError::MissingDiscriminator),
        Some(Value::String(s)) if s.is_empty() => Err(ParseError::MissingDiscriminator),
        Some(Value::String(s)) => {
            NetworkType::from_name(s).ok_or_else(|| ParseError::UnknownNetworkType {
                type_name: s.clone(),
            })
        }
        Some(other) => Err(ParseError::UnknownNetworkType {
            type_name: other.to_string(),
        }),
    }
}
