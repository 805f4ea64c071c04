//! Configuration module for netrecon
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NETRECON_*)
//! 3. `--config <PATH>`, else `./netrecon.toml`, else `<config_dir>/netrecon/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{discover, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BulkConfig, Config, ProfileOverride, ReconcileConfig, StoreConfig};
