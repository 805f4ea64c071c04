//! Domain Layer
//!
//! The core of netrecon - pure reconciliation logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Network records, entities and their sources
//! - `value_objects/` - Immutable value types (NetworkType, IdentityKey, FieldValue)
//! - `policies/` - Per-type comparison profiles
//! - `services/` - Unifier, comparator and reporter
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
