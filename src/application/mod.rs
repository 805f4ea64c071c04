//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Reconciler` - Runs the reconciliation engine for one entity or many
//! - `CheckUseCase` - Loads entities from a record store and reconciles them

pub mod check;
pub mod reconcile;

pub use check::CheckUseCase;
pub use reconcile::{
    BulkReport, EntityFailure, EntityReport, ReconcileOptions, Reconciler, DEFAULT_CONCURRENCY,
};
