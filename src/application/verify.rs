//! Verify Use Case
//!
//! Reads the three seed keys back and applies the checks the node preparer
//! runs when it consumes them. Also reports drift from the local config.

use serde_json::Value;

use super::report::{emit_failure, Report, VerifyReport};
use super::seed_keys::SeedKeys;
use crate::config::Config;
use crate::domain::entities::{DeployConfig, NodeDescriptor, VersionMap};
use crate::domain::ports::{
    HostnameResolver, KvStore, NoopEventSink, PublishEvent, PublishEventSink,
};
use crate::domain::value_objects::{KeySegment, KvKey};
use crate::error::{KvseedError, KvseedResult};

/// Which record a key holds, so the right rules are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    Node,
    Versions,
    DeployConfig,
}

pub struct VerifyUseCase<S, H>
where
    S: KvStore,
    H: HostnameResolver,
{
    store: S,
    resolver: H,
    events: Box<dyn PublishEventSink>,
}

impl<S, H> VerifyUseCase<S, H>
where
    S: KvStore,
    H: HostnameResolver,
{
    pub fn new(store: S, resolver: H) -> Self {
        Self {
            store,
            resolver,
            events: Box::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Box<dyn PublishEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn execute(&self, config: &Config) -> KvseedResult<VerifyReport> {
        let keys = SeedKeys::resolve(config, &self.resolver)?;
        self.events.on_event(PublishEvent::Started {
            command: "verify",
            hostname: keys.hostname.to_string(),
            store: self.store.location(),
        });

        let mut report = Report::new(keys.hostname.clone(), false);

        // The cluster records are looked up under the cluster the stored
        // node record names, not the locally configured one.
        let node_key = keys.node();
        self.announce(0, &node_key);
        let node = self.read_node(&node_key);
        let stored_cluster = node.as_ref().ok().map(|(_, cluster)| cluster.clone());
        let node_result = node.map(|(descriptor, _)| descriptor == config.node);
        self.record(&mut report, 0, node_key.clone(), node_result);

        let cluster = stored_cluster.as_ref().unwrap_or(&keys.cluster);
        let checks = [
            (KvKey::versions(cluster), RecordKind::Versions),
            (KvKey::deploy_config(cluster), RecordKind::DeployConfig),
        ];
        for (offset, (key, kind)) in checks.into_iter().enumerate() {
            let index = offset + 1;
            let result = if stored_cluster.is_some() {
                self.announce(index, &key);
                self.check(&key, kind, config)
            } else {
                Err(KvseedError::InvalidRecord {
                    key: key.to_string(),
                    message: format!("not checked: node record at {} is unusable", node_key),
                })
            };
            self.record(&mut report, index, key, result);
        }

        report.emit_completed("verify", self.events.as_ref());
        Ok(report)
    }

    fn announce(&self, index: usize, key: &KvKey) {
        self.events.on_event(PublishEvent::Request {
            index,
            method: "GET",
            url: self.store.url_for(key),
            body: None,
        });
    }

    fn record(&self, report: &mut VerifyReport, index: usize, key: KvKey, result: KvseedResult<bool>) {
        match &result {
            Ok(matches_local) => {
                tracing::info!(%key, matches_local, "verified");
                self.events.on_event(PublishEvent::Verified {
                    index,
                    key: key.to_string(),
                    matches_local: *matches_local,
                });
            }
            Err(error) => emit_failure(self.events.as_ref(), index, &key, error),
        }
        report.push(key, result);
    }

    /// The stored node record and the cluster segment it points at
    fn read_node(&self, key: &KvKey) -> KvseedResult<(NodeDescriptor, KeySegment)> {
        let value = self.fetch(key, RecordKind::Node)?;
        let node = NodeDescriptor::from_stored(key, &value)?;
        let cluster = KeySegment::parse(&node.cluster).map_err(|e| KvseedError::InvalidRecord {
            key: key.to_string(),
            message: format!("invalid cluster in node data at {}: {}", key, e),
        })?;
        Ok((node, cluster))
    }

    /// Fetch, validate and compare one cluster record
    fn check(&self, key: &KvKey, kind: RecordKind, config: &Config) -> KvseedResult<bool> {
        let value = self.fetch(key, kind)?;

        let matches_local = match kind {
            RecordKind::Node => NodeDescriptor::from_stored(key, &value)? == config.node,
            RecordKind::Versions => VersionMap::from_stored(key, &value)? == config.versions,
            RecordKind::DeployConfig => DeployConfig::from_stored(key, &value)? == config.deploy,
        };

        Ok(matches_local)
    }

    fn fetch(&self, key: &KvKey, kind: RecordKind) -> KvseedResult<Value> {
        let raw = self.store.get(key)?.ok_or_else(|| KvseedError::InvalidRecord {
            key: key.to_string(),
            message: format!("no data at {}", key),
        })?;

        serde_json::from_slice(&raw).map_err(|_| {
            let message = match kind {
                RecordKind::Node => format!("invalid node data at {}", key),
                _ => format!("no or invalid data at {}", key),
            };
            KvseedError::InvalidRecord {
                key: key.to_string(),
                message,
            }
        })
    }
}
