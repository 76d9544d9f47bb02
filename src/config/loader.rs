//! Configuration loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KvseedError, KvseedResult};

use super::types::Config;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "kvseed.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when running on built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> KvseedResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| KvseedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

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

/// Find the config file to use.
///
/// An explicit path must exist. Otherwise `./kvseed.toml`, then the user
/// config (`<config dir>/kvseed/config.toml`), then built-in defaults.
pub fn discover(explicit: Option<&Path>) -> KvseedResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(PathBuf::from(LOCAL_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            let (config, warnings) = load_with_warnings(&path)?;
            Ok(LoadedConfig {
                config,
                warnings,
                source: Some(path),
            })
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(LoadedConfig {
                config: Config::default(),
                warnings: Vec::new(),
                source: None,
            })
        }
    }
}

/// Apply environment variable overrides (KVSEED_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> KvseedResult<Config> {
    // KVSEED_STORE_HOST
    if let Some(host) = get_env("KVSEED_STORE_HOST") {
        config.store.host = host;
    }

    // KVSEED_STORE_PORT
    if let Some(port) = get_env("KVSEED_STORE_PORT") {
        config.store.port = parse_env("KVSEED_STORE_PORT", &port)?;
    }

    // KVSEED_TIMEOUT_SECS
    if let Some(secs) = get_env("KVSEED_TIMEOUT_SECS") {
        config.store.timeout_secs = parse_env("KVSEED_TIMEOUT_SECS", &secs)?;
    }

    // KVSEED_HOSTNAME
    if let Some(hostname) = get_env("KVSEED_HOSTNAME") {
        if !hostname.trim().is_empty() {
            config.hostname = Some(hostname.trim().to_string());
        }
    }

    Ok(config)
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> KvseedResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| KvseedError::InvalidConfig {
        file: PathBuf::from(name),
        message: format!("'{}': {}", raw, e),
    })
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kvseed").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "app",
        "hostname",
        "store",
        "host",
        "port",
        "timeout_secs",
        "node",
        "cluster",
        "versions",
        "deploy",
        "basedir",
        "runas",
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

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
