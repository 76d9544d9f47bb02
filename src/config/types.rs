//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::entities::{DeployConfig, NodeDescriptor, VersionMap};
use crate::domain::value_objects::KeySegment;
use crate::error::{KvseedError, KvseedResult};

use super::loader::{self, ConfigWarning};

/// Where the key-value store lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_host")]
    pub host: String,

    #[serde(default = "default_store_port")]
    pub port: u16,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: default_store_host(),
            port: default_store_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_store_host() -> String {
    "localhost".to_string()
}

fn default_store_port() -> u16 {
    8500
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_app() -> String {
    "slug".to_string()
}

/// Everything a run needs, passed explicitly to the use cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Application slug registered on this node
    #[serde(default = "default_app")]
    pub app: String,

    /// Overrides the OS hostname when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub node: NodeDescriptor,

    #[serde(default)]
    pub versions: VersionMap,

    #[serde(default)]
    pub deploy: DeployConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: default_app(),
            hostname: None,
            store: StoreConfig::default(),
            node: NodeDescriptor::default(),
            versions: VersionMap::default(),
            deploy: DeployConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> KvseedResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> KvseedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (KVSEED_* prefix)
    pub fn with_env_overrides(self) -> KvseedResult<Self> {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// The app slug as a key segment
    pub fn app_segment(&self) -> KvseedResult<KeySegment> {
        KeySegment::parse(&self.app)
    }

    /// The cluster name as a key segment
    pub fn cluster_segment(&self) -> KvseedResult<KeySegment> {
        KeySegment::parse(&self.node.cluster)
    }

    /// Base URL of the store, e.g. `http://localhost:8500/`.
    ///
    /// The host must be a bare host name or address: anything that moves the
    /// configured port out of the authority (`/`, `?`, `#`, `@`) is rejected.
    pub fn store_url(&self) -> KvseedResult<Url> {
        let unusable = |reason: String| KvseedError::InvalidConfig {
            file: "store.host".into(),
            message: format!("'{}' is not a usable host: {}", self.store.host, reason),
        };

        let url = Url::parse(&format!("http://{}:{}/", self.store.host, self.store.port))
            .map_err(|e| unusable(e.to_string()))?;

        let bare = url.port_or_known_default() == Some(self.store.port)
            && url.path() == "/"
            && url.query().is_none()
            && url.fragment().is_none()
            && url.username().is_empty()
            && url.password().is_none();
        if !bare {
            return Err(unusable("expected a bare host name or address".to_string()));
        }

        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.store.timeout_secs)
    }

    /// Check the values that would otherwise only fail once a request is built
    pub fn validate(&self, source: &Path) -> KvseedResult<()> {
        let fail = |message: String| KvseedError::InvalidConfig {
            file: source.to_path_buf(),
            message,
        };

        self.app_segment()
            .map_err(|e| fail(format!("app: {}", e)))?;
        self.cluster_segment()
            .map_err(|e| fail(format!("node.cluster: {}", e)))?;
        if let Some(hostname) = &self.hostname {
            KeySegment::parse(hostname).map_err(|e| fail(format!("hostname: {}", e)))?;
        }
        if self.store.port == 0 {
            return Err(fail("store.port must not be 0".to_string()));
        }
        if self.store.timeout_secs == 0 {
            return Err(fail("store.timeout_secs must be at least 1".to_string()));
        }
        if !self.deploy.has_absolute_basedir() {
            return Err(fail(format!(
                "deploy.basedir must be absolute, got '{}'",
                self.deploy.basedir
            )));
        }
        self.store_url()?;

        Ok(())
    }
}
