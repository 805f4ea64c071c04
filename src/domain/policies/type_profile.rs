//! Type Profile Policy
//!
//! Per network type: which fields are compared, and which fields forgive a
//! missing key or an explicit null. Profiles are plain values handed to the
//! engine; nothing here is process-wide state.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::value_objects::NetworkType;

/// Comparison policy for one network type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    fields_to_check: Vec<String>,
    allow_missing: BTreeSet<String>,
    allow_null: BTreeSet<String>,
}

impl TypeProfile {
    pub fn new<F, M, N>(fields_to_check: F, allow_missing: M, allow_null: N) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            fields_to_check: fields_to_check.into_iter().map(Into::into).collect(),
            allow_missing: allow_missing.into_iter().map(Into::into).collect(),
            allow_null: allow_null.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in profile for a network type
    pub fn builtin(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Ip => Self::new(
                ["ip", "subnet_mask", "mac"],
                ["mac", "subnet_mask"],
                ["subnet_mask", "mac"],
            ),
            NetworkType::Cidr => Self::new(["cidrs"], ["cidrs"], ["cidrs"]),
            NetworkType::HostSubnet => Self::new(
                ["egress_cidrs", "egress_ips"],
                Vec::<String>::new(),
                Vec::<String>::new(),
            ),
        }
    }

    /// Fields compared across sources, in report order
    pub fn fields_to_check(&self) -> &[String] {
        &self.fields_to_check
    }

    pub fn allow_missing_fields(&self) -> impl Iterator<Item = &str> {
        self.allow_missing.iter().map(String::as_str)
    }

    pub fn allow_null_fields(&self) -> impl Iterator<Item = &str> {
        self.allow_null.iter().map(String::as_str)
    }

    /// An absent key for `field` is never a finding
    pub fn allows_missing(&self, field: &str) -> bool {
        self.allow_missing.contains(field)
    }

    /// An explicit null for `field` is ignored rather than counted as missing
    pub fn allows_null(&self, field: &str) -> bool {
        self.allow_null.contains(field)
    }

    pub fn with_fields_to_check<I: IntoIterator<Item = String>>(mut self, fields: I) -> Self {
        self.fields_to_check = fields.into_iter().collect();
        self
    }

    pub fn with_allow_missing<I: IntoIterator<Item = String>>(mut self, fields: I) -> Self {
        self.allow_missing = fields.into_iter().collect();
        self
    }

    pub fn with_allow_null<I: IntoIterator<Item = String>>(mut self, fields: I) -> Self {
        self.allow_null = fields.into_iter().collect();
        self
    }
}

/// Immutable set of profiles, one per registered network type.
///
/// Records of an unregistered type still form groups but are never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRegistry {
    profiles: BTreeMap<NetworkType, TypeProfile>,
}

impl ProfileRegistry {
    /// Registry holding the built-in profile of every network type
    pub fn builtin() -> Self {
        NetworkType::ALL
            .into_iter()
            .fold(Self::empty(), |registry, t| {
                registry.with_profile(t, TypeProfile::builtin(t))
            })
    }

    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    pub fn with_profile(mut self, network_type: NetworkType, profile: TypeProfile) -> Self {
        self.profiles.insert(network_type, profile);
        self
    }

    pub fn without(mut self, network_type: NetworkType) -> Self {
        self.profiles.remove(&network_type);
        self
    }

    pub fn profile_for(&self, network_type: NetworkType) -> Option<&TypeProfile> {
        self.profiles.get(&network_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NetworkType, &TypeProfile)> {
        self.profiles.iter().map(|(t, p)| (*t, p))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
