//! Configuration module for kvseed
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (KVSEED_*)
//! 3. Config file (`--config`, `./kvseed.toml`, `<config dir>/kvseed/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{discover, with_env_overrides, ConfigWarning, LoadedConfig};
pub use types::{Config, StoreConfig};
