//! Published records
//!
//! Each record serializes to the exact JSON document stored under its key.
//! The `from_stored` constructors apply the rules the node preparer uses
//! when it reads the same keys back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::value_objects::KvKey;
use crate::error::{KvseedError, KvseedResult};

/// Stored under `nodes/{hostname}/{app}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub cluster: String,
}

impl Default for NodeDescriptor {
    fn default() -> Self {
        Self {
            cluster: "development".to_string(),
        }
    }
}

impl NodeDescriptor {
    pub fn from_stored(key: &KvKey, value: &Value) -> KvseedResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| invalid(key, format!("invalid node data at {}", key)))?;

        match object.get("cluster").and_then(Value::as_str) {
            Some(cluster) => Ok(Self {
                cluster: cluster.to_string(),
            }),
            None => Err(invalid(key, format!("no cluster key in node data at {}", key))),
        }
    }
}

/// Stored under `clusters/{cluster}/versions`: commit hash to label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionMap(pub BTreeMap<String, String>);

impl Default for VersionMap {
    fn default() -> Self {
        let mut versions = BTreeMap::new();
        versions.insert(
            "e928e5ad8814441e7c503d7f6c9e55d72584c006".to_string(),
            "prep".to_string(),
        );
        Self(versions)
    }
}

impl VersionMap {
    pub fn from_stored(key: &KvKey, value: &Value) -> KvseedResult<Self> {
        serde_json::from_value::<BTreeMap<String, String>>(value.clone())
            .map(Self)
            .map_err(|_| invalid(key, format!("no or invalid data at {}", key)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Stored under `clusters/{cluster}/deploy_config`.
///
/// Changing this requires privileged access on the consumer side: it decides
/// where artifacts are unpacked and which user runs them. `runas = None`
/// means no user override and is always written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    pub basedir: String,
    #[serde(default)]
    pub runas: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            basedir: "/tmp/slug".to_string(),
            runas: None,
        }
    }
}

impl DeployConfig {
    pub fn from_stored(key: &KvKey, value: &Value) -> KvseedResult<Self> {
        let config: DeployConfig = serde_json::from_value(value.clone())
            .map_err(|_| invalid(key, format!("no or invalid data at {}", key)))?;

        if !config.has_absolute_basedir() {
            return Err(invalid(
                key,
                format!("not allowing relative basedir {}", config.basedir),
            ));
        }

        Ok(config)
    }

    /// Basedirs are paths on the target node, always Unix-style
    pub fn has_absolute_basedir(&self) -> bool {
        self.basedir.starts_with('/')
    }
}

fn invalid(key: &KvKey, message: String) -> KvseedError {
    KvseedError::InvalidRecord {
        key: key.to_string(),
        message,
    }
}
