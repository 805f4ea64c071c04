//! Value objects - immutable types without identity

mod field_value;
mod identity_key;
mod network_type;

pub use field_value::{FieldValue, Reported};
pub use identity_key::{is_reserved_label, IdentityKey, TRUTH_LABEL};
pub use network_type::NetworkType;
