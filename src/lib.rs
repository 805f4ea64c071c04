//! netrecon - field-level network reconciliation
//!
//! Servers and clusters carry their own network list plus the lists reported
//! by independent collectors (inventory, monitoring, ...). netrecon groups
//! those records by identity, compares the fields that matter for each
//! network type, and reports mismatched and missing values per source.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{BulkReport, CheckUseCase, EntityReport, ReconcileOptions, Reconciler};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Entity, EntityKind, NetworkRecord, ParseError, RawNetwork, Source};
pub use domain::policies::{ProfileRegistry, TypeProfile};
pub use domain::services::{FieldDetail, InconsistencyReport};
pub use domain::value_objects::NetworkType;
pub use error::{ReconError, ReconResult};
pub use infrastructure::FsEntityRepository;
