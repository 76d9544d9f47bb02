//! Key resolution shared by every use case

use crate::config::Config;
use crate::domain::ports::{FixedHostname, HostnameResolver};
use crate::domain::value_objects::{Hostname, KeySegment, KvKey};
use crate::error::KvseedResult;

/// The keys one run touches, resolved from config and the local hostname
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedKeys {
    pub hostname: Hostname,
    pub app: KeySegment,
    pub cluster: KeySegment,
}

impl SeedKeys {
    /// Resolve the hostname (config override first) and validate segments.
    ///
    /// Nothing talks to the store before this succeeds.
    pub fn resolve(config: &Config, resolver: &dyn HostnameResolver) -> KvseedResult<Self> {
        let hostname = match &config.hostname {
            Some(name) => FixedHostname(Hostname::parse(name)?).resolve()?,
            None => resolver.resolve()?,
        };

        Ok(Self {
            hostname,
            app: config.app_segment()?,
            cluster: config.cluster_segment()?,
        })
    }

    /// `nodes/{hostname}/{app}`
    pub fn node(&self) -> KvKey {
        KvKey::node(&self.hostname, &self.app)
    }

    /// `clusters/{cluster}/versions`
    pub fn versions(&self) -> KvKey {
        KvKey::versions(&self.cluster)
    }

    /// `clusters/{cluster}/deploy_config`
    pub fn deploy_config(&self) -> KvKey {
        KvKey::deploy_config(&self.cluster)
    }

    pub fn node_tree(&self) -> KvKey {
        KvKey::node_tree(&self.hostname)
    }

    pub fn cluster_tree(&self) -> KvKey {
        KvKey::cluster_tree(&self.cluster)
    }
}
