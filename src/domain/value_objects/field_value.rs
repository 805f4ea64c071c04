//! Reported field values and their equality rule.
//!
//! A source either omits a field, reports an explicit `null`, or reports a
//! real value. Real values are compared with [`FieldValue`]'s `PartialEq`:
//! scalars by plain equality, lists as multisets (order ignored, duplicates
//! counted), and a scalar never equals a list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A real (non-null) value reported for a field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<Value>),
    Scalar(Value),
}

impl FieldValue {
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Scalar(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Scalar(a), FieldValue::Scalar(b)) => a == b,
            (FieldValue::List(a), FieldValue::List(b)) => same_multiset(a, b),
            _ => false,
        }
    }
}

impl Eq for FieldValue {}

fn same_multiset(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: Vec<(&Value, usize)> = Vec::new();
    for item in a {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, n)) => *n += 1,
            None => counts.push((item, 1)),
        }
    }

    for item in b {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, n)) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }

    true
}

/// What a single record reports for one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Reported {
    /// The key is not present in the record
    #[default]
    Absent,
    /// The key is present with an explicit `null`
    Null,
    /// The key carries a real value (an empty string or list still counts)
    Value(FieldValue),
}

impl Reported {
    /// Classify a key lookup on a raw JSON map
    pub fn from_lookup(value: Option<&Value>) -> Self {
        match value {
            None => Reported::Absent,
            Some(Value::Null) => Reported::Null,
            Some(Value::Array(items)) => Reported::Value(FieldValue::List(items.clone())),
            Some(other) => Reported::Value(FieldValue::Scalar(other.clone())),
        }
    }

    pub fn value(&self) -> Option<&FieldValue> {
        match self {
            Reported::Value(v) => Some(v),
            Reported::Absent | Reported::Null => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Reported::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Reported::Null)
    }
}
