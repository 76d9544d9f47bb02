//! Clear Use Case
//!
//! Deletes the node subtree and the cluster subtree so a store can be
//! seeded again from scratch.

use super::report::{emit_failure, ClearReport, Report};
use super::seed_keys::SeedKeys;
use crate::config::Config;
use crate::domain::ports::{
    HostnameResolver, KvStore, NoopEventSink, PublishEvent, PublishEventSink,
};
use crate::error::KvseedResult;

#[derive(Debug, Clone, Default)]
pub struct ClearOptions {
    pub dry_run: bool,
}

pub struct ClearUseCase<S, H>
where
    S: KvStore,
    H: HostnameResolver,
{
    store: S,
    resolver: H,
    events: Box<dyn PublishEventSink>,
}

impl<S, H> ClearUseCase<S, H>
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

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn execute(&self, config: &Config, options: &ClearOptions) -> KvseedResult<ClearReport> {
        let keys = SeedKeys::resolve(config, &self.resolver)?;
        self.events.on_event(PublishEvent::Started {
            command: "clear",
            hostname: keys.hostname.to_string(),
            store: self.store.location(),
        });

        let mut report = Report::new(keys.hostname.clone(), options.dry_run);
        for (index, key) in [keys.node_tree(), keys.cluster_tree()].into_iter().enumerate() {
            self.events.on_event(PublishEvent::Request {
                index,
                method: "DELETE",
                url: self.store.url_for(&key),
                body: None,
            });

            let result = if options.dry_run {
                Ok(None)
            } else {
                self.store.delete_tree(&key).map(Some)
            };

            match &result {
                Ok(Some(status)) => {
                    tracing::info!(%key, status, "deleted subtree");
                    self.events.on_event(PublishEvent::Succeeded {
                        index,
                        key: key.to_string(),
                        status: *status,
                    });
                }
                Ok(None) => {}
                Err(error) => emit_failure(self.events.as_ref(), index, &key, error),
            }
            report.push(key, result);
        }

        report.emit_completed("clear", self.events.as_ref());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryKvStore;
    use crate::domain::ports::FixedHostname;
    use crate::domain::value_objects::Hostname;

    fn node1() -> FixedHostname {
        FixedHostname(Hostname::parse("node1").unwrap())
    }

    fn populated() -> MemoryKvStore {
        MemoryKvStore::with(&[
            ("nodes/node1/slug", "{}"),
            ("nodes/node1/other", "{}"),
            ("nodes/node2/slug", "{}"),
            ("clusters/development/versions", "{}"),
            ("clusters/development/deploy_config", "{}"),
            ("clusters/staging/versions", "{}"),
        ])
    }

    #[test]
    fn removes_node_and_cluster_subtrees_only() {
        let use_case = ClearUseCase::new(populated(), node1());

        let report = use_case
            .execute(&Config::default(), &ClearOptions::default())
            .unwrap();

        assert!(report.is_success());
        let remaining: Vec<String> = use_case.store().values.borrow().keys().cloned().collect();
        assert_eq!(remaining, vec!["clusters/staging/versions", "nodes/node2/slug"]);
    }

    #[test]
    fn dry_run_keeps_everything() {
        let use_case = ClearUseCase::new(populated(), node1());

        use_case
            .execute(&Config::default(), &ClearOptions { dry_run: true })
            .unwrap();

        assert_eq!(use_case.store().values.borrow().len(), 6);
    }

    #[test]
    fn rejected_delete_is_reported() {
        let store = populated().rejecting("clusters/development", 403);
        let report = ClearUseCase::new(store, node1())
            .execute(&Config::default(), &ClearOptions::default())
            .unwrap();

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
    }
}
