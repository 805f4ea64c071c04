//! Field Comparator
//!
//! Classifies what the members of one unified group report for each checked
//! field. Real values are split into equality classes; absent keys and nulls
//! are counted as missing unless the type profile forgives them.

use serde::{Deserialize, Serialize};

use crate::domain::policies::TypeProfile;
use crate::domain::value_objects::{FieldValue, Reported};

use super::UnifiedGroup;

/// One equality class of real values and the sources that reported it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueGroup {
    pub value: FieldValue,
    pub sources: Vec<String>,
}

/// A finding on one field of one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldDetail {
    /// Two or more distinct values were reported
    Mismatch {
        field: String,
        values: Vec<ValueGroup>,
        message: String,
    },
    /// Some, but not all, members lack the field
    Missing {
        field: String,
        #[serde(rename = "missingSources")]
        missing_sources: Vec<String>,
        message: String,
    },
}

impl FieldDetail {
    pub fn mismatch(field: &str, values: Vec<ValueGroup>) -> Self {
        FieldDetail::Mismatch {
            field: field.to_string(),
            values,
            message: format!("{} mismatch across sources", field.to_uppercase()),
        }
    }

    pub fn missing(field: &str, missing_sources: Vec<String>) -> Self {
        FieldDetail::Missing {
            field: field.to_string(),
            missing_sources,
            message: format!("{} missing in some sources", field.to_uppercase()),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            FieldDetail::Mismatch { field, .. } | FieldDetail::Missing { field, .. } => field,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FieldDetail::Mismatch { message, .. } | FieldDetail::Missing { message, .. } => message,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, FieldDetail::Mismatch { .. })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldDetail::Missing { .. })
    }
}

/// Compare every field of `profile` across the members of `group`.
///
/// Per field, a mismatch is reported when real values fall into two or more
/// classes, and a missing finding when some (but not all) members lack the
/// field and the field is not in the profile's allow-missing set. Both may be
/// reported for the same field.
pub fn compare(group: &UnifiedGroup, profile: &TypeProfile) -> Vec<FieldDetail> {
    let mut details = Vec::new();

    for field in profile.fields_to_check() {
        let mut classes: Vec<ValueGroup> = Vec::new();
        let mut missing: Vec<String> = Vec::new();

        for member in group.members() {
            match member.record.field(field) {
                Reported::Absent => {
                    if !profile.allows_missing(field) {
                        missing.push(member.label.clone());
                    }
                }
                Reported::Null => {
                    if !profile.allows_null(field) {
                        missing.push(member.label.clone());
                    }
                }
                Reported::Value(value) => match classes.iter_mut().find(|c| c.value == *value) {
                    Some(class) => {
                        if !class.sources.contains(&member.label) {
                            class.sources.push(member.label.clone());
                        }
                    }
                    None => classes.push(ValueGroup {
                        value: value.clone(),
                        sources: vec![member.label.clone()],
                    }),
                },
            }
        }

        tracing::trace!(
            key = %group.key(),
            field = field.as_str(),
            classes = classes.len(),
            missing = missing.len(),
            "compared field"
        );

        if classes.len() >= 2 {
            details.push(FieldDetail::mismatch(field, classes));
        }

        if !missing.is_empty() && missing.len() < group.len() && !profile.allows_missing(field) {
            details.push(FieldDetail::missing(field, missing));
        }
    }

    details
}
