//! Domain Services
//!
//! The reconciliation engine: unify records by identity, compare fields,
//! report findings. Pure functions over already-loaded entity data; no I/O.

mod comparator;
mod reporter;
mod unifier;

pub use comparator::{compare, FieldDetail, ValueGroup};
pub use reporter::{report, InconsistencyReport, ReportOptions};
pub use unifier::{unify, GroupMember, UnifiedGroup, UnifiedGroups};
