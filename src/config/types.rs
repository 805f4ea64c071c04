//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{ReconcileOptions, DEFAULT_CONCURRENCY};
use crate::domain::policies::{ProfileRegistry, TypeProfile};
use crate::domain::value_objects::NetworkType;
use crate::error::{ReconError, ReconResult};

use super::loader::{self, ConfigWarning};

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data")
}

/// Reconciliation defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReconcileConfig {
    /// Network-type filter; empty means every type
    #[serde(default)]
    pub types: Vec<NetworkType>,

    /// Keep groups without findings in single-entity reports
    #[serde(default)]
    pub return_all: bool,
}

/// Bulk report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkConfig {
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

/// Per-type profile override.
///
/// A list given here replaces the built-in list for that type; an omitted
/// list keeps the built-in one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOverride {
    #[serde(default)]
    pub fields_to_check: Option<Vec<String>>,

    #[serde(default)]
    pub allow_missing: Option<Vec<String>>,

    #[serde(default)]
    pub allow_null: Option<Vec<String>>,

    /// `false` unregisters the type: its groups are never compared
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for ProfileOverride {
    fn default() -> Self {
        Self {
            fields_to_check: None,
            allow_missing: None,
            allow_null: None,
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl ProfileOverride {
    fn apply(&self, mut profile: TypeProfile) -> TypeProfile {
        if let Some(fields) = &self.fields_to_check {
            profile = profile.with_fields_to_check(fields.iter().cloned());
        }
        if let Some(fields) = &self.allow_missing {
            profile = profile.with_allow_missing(fields.iter().cloned());
        }
        if let Some(fields) = &self.allow_null {
            profile = profile.with_allow_null(fields.iter().cloned());
        }
        profile
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub reconcile: ReconcileConfig,

    #[serde(default)]
    pub bulk: BulkConfig,

    /// Keyed by network type name (`ip`, `cidr`, `hostsubnet`)
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileOverride>,

    /// File this configuration was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ReconResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ReconResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the discovered one, else defaults
    pub fn resolve(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> ReconResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, working_dir)
    }

    /// Apply environment variable overrides (NETRECON_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Built-in profiles merged with the `[profiles.*]` overrides
    pub fn profile_registry(&self) -> ReconResult<ProfileRegistry> {
        let mut registry = ProfileRegistry::builtin();

        for (name, profile_override) in &self.profiles {
            let network_type = NetworkType::from_name(name).ok_or_else(|| ReconError::Config {
                file: self.source_file(),
                message: format!(
                    "unknown network type '{}' in [profiles] (expected one of: {})",
                    name,
                    NetworkType::ALL.map(|t| t.as_str()).join(", ")
                ),
            })?;

            registry = if profile_override.enabled {
                let base = registry
                    .profile_for(network_type)
                    .cloned()
                    .unwrap_or_else(|| TypeProfile::builtin(network_type));
                registry.with_profile(network_type, profile_override.apply(base))
            } else {
                registry.without(network_type)
            };
        }

        Ok(registry)
    }

    /// Reconcile options described by this configuration
    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions::new()
            .with_return_all(self.reconcile.return_all)
            .with_types(self.reconcile.types.iter().copied())
            .with_concurrency(self.bulk.concurrency)
    }

    fn source_file(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| PathBuf::from("<defaults>"))
    }
}
