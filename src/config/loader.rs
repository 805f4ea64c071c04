//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::NetworkType;
use crate::error::{ReconError, ReconResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "netrecon.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ReconResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ReconError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.source = Some(path.to_path_buf());

    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn validate(config: &Config, path: &Path) -> ReconResult<()> {
    if config.bulk.concurrency == 0 {
        return Err(ReconError::Config {
            file: path.to_path_buf(),
            message: "bulk.concurrency must be at least 1".to_string(),
        });
    }
    config.profile_registry().map(|_| ())
}

/// Find the config file: `netrecon.toml` in the working directory, then the
/// user config directory.
pub fn discover(working_dir: &Path) -> Option<PathBuf> {
    let project_config = working_dir.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    dirs::config_dir()
        .map(|dir| dir.join("netrecon/config.toml"))
        .filter(|p| p.is_file())
}

/// Load the explicit file, else the discovered one, else defaults
pub fn resolve(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> ReconResult<(Config, Vec<ConfigWarning>)> {
    match explicit.map(Path::to_path_buf).or_else(|| discover(working_dir)) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)
        }
        None => Ok((Config::default(), Vec::new())),
    }
}

/// Apply environment variable overrides (NETRECON_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides<F>(mut config: Config, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // NETRECON_STORE
    if let Some(path) = env("NETRECON_STORE").filter(|p| !p.trim().is_empty()) {
        config.store.path = PathBuf::from(path);
    }

    // NETRECON_CONCURRENCY
    if let Some(value) = env("NETRECON_CONCURRENCY") {
        match value.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.bulk.concurrency = n,
            _ => tracing::warn!(value = %value, "ignoring invalid NETRECON_CONCURRENCY"),
        }
    }

    // NETRECON_TYPES (comma-separated)
    if let Some(types) = env("NETRECON_TYPES") {
        let parsed: Vec<NetworkType> = types
            .split(',')
            .filter_map(|s| {
                let parsed = NetworkType::from_name(s.trim());
                if parsed.is_none() && !s.trim().is_empty() {
                    tracing::warn!(value = s.trim(), "ignoring unknown type in NETRECON_TYPES");
                }
                parsed
            })
            .collect();
        if !parsed.is_empty() {
            config.reconcile.types = parsed;
        }
    }

    // NETRECON_RETURN_ALL
    if let Some(val) = env("NETRECON_RETURN_ALL") {
        config.reconcile.return_all = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "path",
        "reconcile",
        "types",
        "return_all",
        "bulk",
        "concurrency",
        "profiles",
        "fields_to_check",
        "allow_missing",
        "allow_null",
        "enabled",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
