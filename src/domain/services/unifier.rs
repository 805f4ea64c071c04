//! Source Unifier
//!
//! Collects the network records of Truth and every collector source into
//! groups sharing one identity key. Truth is processed first, then sources in
//! lexicographic label order, so group order and member order are stable for
//! identical input.

use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::{NetworkRecord, RawNetwork, Source};
use crate::domain::value_objects::{is_reserved_label, IdentityKey, NetworkType, TRUTH_LABEL};
use crate::error::{ReconError, ReconResult};

/// One record and the label of the source that reported it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub label: String,
    pub record: NetworkRecord,
}

/// All records sharing one identity key, in processing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedGroup {
    key: IdentityKey,
    members: Vec<GroupMember>,
}

impl UnifiedGroup {
    pub fn key(&self) -> &IdentityKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        self.key.name()
    }

    pub fn network_type(&self) -> NetworkType {
        self.key.network_type()
    }

    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }

    /// Contributing labels in processing order (a label repeats if its
    /// source reported the same identity twice)
    pub fn labels(&self) -> Vec<String> {
        self.members.iter().map(|m| m.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Groups in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifiedGroups {
    groups: Vec<UnifiedGroup>,
    index: HashMap<IdentityKey, usize>,
}

impl UnifiedGroups {
    fn push(&mut self, label: &str, record: NetworkRecord) {
        let key = record.identity();
        let member = GroupMember {
            label: label.to_string(),
            record,
        };

        match self.index.get(&key) {
            Some(&i) => self.groups[i].members.push(member),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(UnifiedGroup {
                    key,
                    members: vec![member],
                });
            }
        }
    }

    pub fn get(&self, key: &IdentityKey) -> Option<&UnifiedGroup> {
        self.index.get(key).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnifiedGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a UnifiedGroups {
    type Item = &'a UnifiedGroup;
    type IntoIter = std::slice::Iter<'a, UnifiedGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group Truth's networks and every source's networks by identity key.
///
/// Fails with [`ReconError::ReservedSourceName`] if a source is labelled
/// `Truth`, and with [`ReconError::InvalidNetwork`] on the first record that
/// does not parse.
pub fn unify(
    truth: Option<&[RawNetwork]>,
    sources: &BTreeMap<String, Source>,
) -> ReconResult<UnifiedGroups> {
    if sources.keys().any(|label| is_reserved_label(label)) {
        return Err(ReconError::ReservedSourceName);
    }

    let mut groups = UnifiedGroups::default();

    // BTreeMap iteration is the lexicographic label order.
    let ordered = std::iter::once((TRUTH_LABEL, truth.unwrap_or_default()))
        .chain(sources.iter().map(|(label, s)| (label.as_str(), s.networks())));

    for (label, networks) in ordered {
        for (index, raw) in networks.iter().enumerate() {
            let record =
                NetworkRecord::parse(raw).map_err(|error| ReconError::InvalidNetwork {
                    source_label: label.to_string(),
                    index,
                    error,
                })?;
            groups.push(label, record);
        }
    }

    tracing::debug!(
        groups = groups.len(),
        sources = sources.len(),
        "unified network records"
    );

    Ok(groups)
}
