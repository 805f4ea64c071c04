//! Reconcile Use Case
//!
//! Drives the reconciliation engine over loaded entities.
//!
//! This module handles:
//! - Single-entity reports, optionally keeping clean groups
//! - Bulk reports fanned out over a bounded set of worker threads
//! - Isolating per-entity failures in bulk mode

mod options;
mod result;
mod use_case;


pub use options::{ReconcileOptions, DEFAULT_CONCURRENCY};
pub use result::{BulkReport, EntityFailure, EntityReport};
pub use use_case::Reconciler;
