//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Record store implementations (filesystem documents)

pub mod repositories;

pub use repositories::FsEntityRepository;
