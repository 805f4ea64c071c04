//! Identity key - groups same-purpose network records across sources

use super::NetworkType;

/// Label under which the entity's own network list takes part in a comparison.
pub const TRUTH_LABEL: &str = "Truth";

/// Returns true if `label` is reserved and cannot name a collector source
pub fn is_reserved_label(label: &str) -> bool {
    label == TRUTH_LABEL
}

/// `name` + `type` identity shared by every member of a unified group.
///
/// Displays as `<name>-<type>`, the key used in reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey {
    name: String,
    network_type: NetworkType,
}

impl IdentityKey {
    pub fn new(name: impl Into<String>, network_type: NetworkType) -> Self {
        Self {
            name: name.into(),
            network_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.name, self.network_type)
    }
}
