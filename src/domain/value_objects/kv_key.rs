//! Key Path Value Objects
//!
//! A `KvKey` is a slash-separated path under the store's `/v1/kv/` root.
//! Keys are only built from validated `KeySegment`s, so a hostname or slug
//! can never smuggle in extra path components.

use std::fmt;

use super::Hostname;
use crate::error::{KvseedError, KvseedResult};

/// One component of a key path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySegment(String);

impl KeySegment {
    /// Validate a raw string as a key segment
    pub fn parse(raw: &str) -> KvseedResult<Self> {
        let reason = if raw.is_empty() {
            Some("must not be empty")
        } else if raw.contains('/') {
            Some("must not contain '/'")
        } else if raw.chars().any(|c| c.is_control() || c.is_whitespace()) {
            Some("must not contain whitespace or control characters")
        } else if raw == "." || raw == ".." {
            Some("must not be a relative path component")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(KvseedError::InvalidKeySegment {
                segment: raw.to_string(),
                reason,
            }),
            None => Ok(Self(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A key in the store, e.g. `nodes/node1/slug`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KvKey(String);

impl KvKey {
    /// `nodes/{hostname}/{app}`
    pub fn node(hostname: &Hostname, app: &KeySegment) -> Self {
        Self(format!("nodes/{}/{}", hostname.as_str(), app))
    }

    /// `nodes/{hostname}`, the subtree holding every app on a node
    pub fn node_tree(hostname: &Hostname) -> Self {
        Self(format!("nodes/{}", hostname.as_str()))
    }

    /// `clusters/{cluster}/versions`
    pub fn versions(cluster: &KeySegment) -> Self {
        Self(format!("clusters/{}/versions", cluster))
    }

    /// `clusters/{cluster}/deploy_config`
    pub fn deploy_config(cluster: &KeySegment) -> Self {
        Self(format!("clusters/{}/deploy_config", cluster))
    }

    /// `clusters/{cluster}`
    pub fn cluster_tree(cluster: &KeySegment) -> Self {
        Self(format!("clusters/{}", cluster))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KvKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
