//! Publish Use Case
//!
//! Pushes the three seed records to the store, in order:
//! 1. `nodes/{hostname}/{app}` <- node descriptor
//! 2. `clusters/{cluster}/versions` <- version map
//! 3. `clusters/{cluster}/deploy_config` <- deploy config
//!
//! Every PUT is attempted even if an earlier one failed.

use serde::Serialize;

use super::report::{emit_failure, PublishReport, Report};
use super::seed_keys::SeedKeys;
use crate::config::Config;
use crate::domain::ports::{
    HostnameResolver, KvStore, NoopEventSink, PublishEvent, PublishEventSink,
};
use crate::domain::value_objects::KvKey;
use crate::error::KvseedResult;

/// Options for the publish use case
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Print the requests without sending them
    pub dry_run: bool,
}

impl PublishOptions {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Publish use case, parameterized by its ports
pub struct PublishUseCase<S, H>
where
    S: KvStore,
    H: HostnameResolver,
{
    store: S,
    resolver: H,
    events: Box<dyn PublishEventSink>,
}

impl<S, H> PublishUseCase<S, H>
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

    /// Encode `value` as JSON and PUT it under `key`, returning the HTTP status
    pub fn publish<T: Serialize + ?Sized>(&self, key: &KvKey, value: &T) -> KvseedResult<u16> {
        let body = serde_json::to_string(value)?;
        self.announce(0, key, &body);
        self.store.put(key, body.as_bytes())
    }

    pub fn execute(&self, config: &Config, options: &PublishOptions) -> KvseedResult<PublishReport> {
        let keys = SeedKeys::resolve(config, &self.resolver)?;
        tracing::info!(
            hostname = %keys.hostname,
            app = %keys.app,
            cluster = %keys.cluster,
            dry_run = options.dry_run,
            "publishing seed records"
        );

        self.events.on_event(PublishEvent::Started {
            command: "publish",
            hostname: keys.hostname.to_string(),
            store: self.store.location(),
        });

        let records = [
            (keys.node(), serde_json::to_string(&config.node)),
            (keys.versions(), serde_json::to_string(&config.versions)),
            (keys.deploy_config(), serde_json::to_string(&config.deploy)),
        ];

        let mut report = Report::new(keys.hostname.clone(), options.dry_run);
        for (index, (key, encoded)) in records.into_iter().enumerate() {
            let result = encoded.map_err(Into::into).and_then(|body| {
                self.announce(index, &key, &body);
                if options.dry_run {
                    Ok(None)
                } else {
                    self.store.put(&key, body.as_bytes()).map(Some)
                }
            });

            match &result {
                Ok(Some(status)) => {
                    tracing::info!(%key, status, "published");
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

        report.emit_completed("publish", self.events.as_ref());
        Ok(report)
    }

    fn announce(&self, index: usize, key: &KvKey, body: &str) {
        self.events.on_event(PublishEvent::Request {
            index,
            method: "PUT",
            url: self.store.url_for(key),
            body: Some(body.to_string()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryKvStore;
    use crate::domain::ports::publish_events::testing::RecordingEventSink;
    use crate::domain::ports::FixedHostname;
    use crate::domain::value_objects::Hostname;
    use crate::error::KvseedError;
    use serde_json::json;

    fn node1() -> FixedHostname {
        FixedHostname(Hostname::parse("node1").unwrap())
    }

    #[test]
    fn publishes_three_records_under_fixed_keys() {
        let use_case = PublishUseCase::new(MemoryKvStore::default(), node1());

        let report = use_case
            .execute(&Config::default(), &PublishOptions::default())
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.succeeded(), 3);

        let store = use_case.store();
        assert_eq!(
            store.value("nodes/node1/slug"),
            Some(json!({"cluster": "development"}))
        );
        assert_eq!(
            store.value("clusters/development/versions"),
            Some(json!({"e928e5ad8814441e7c503d7f6c9e55d72584c006": "prep"}))
        );
        assert_eq!(
            store.value("clusters/development/deploy_config"),
            Some(json!({"basedir": "/tmp/slug", "runas": null}))
        );
    }

    #[test]
    fn request_is_announced_before_result() {
        let sink = RecordingEventSink::default();
        let use_case = PublishUseCase::new(MemoryKvStore::default(), node1())
            .with_events(Box::new(sink.clone()));

        use_case
            .execute(&Config::default(), &PublishOptions::default())
            .unwrap();

        let events = sink.snapshot();
        assert!(matches!(events[0], PublishEvent::Started { .. }));
        assert_eq!(
            events[1],
            PublishEvent::Request {
                index: 0,
                method: "PUT",
                url: "memory://v1/kv/nodes/node1/slug".to_string(),
                body: Some(r#"{"cluster":"development"}"#.to_string()),
            }
        );
        assert!(matches!(events[2], PublishEvent::Succeeded { index: 0, status: 200, .. }));
        assert!(matches!(
            events.last(),
            Some(PublishEvent::Completed {
                succeeded: 3,
                failed: 0,
                ..
            })
        ));
    }

    #[test]
    fn rejected_put_does_not_stop_later_puts() {
        let store = MemoryKvStore::default().rejecting("clusters/development/versions", 403);
        let use_case = PublishUseCase::new(store, node1());

        let report = use_case
            .execute(&Config::default(), &PublishOptions::default())
            .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.succeeded(), 2);
        let (key, error) = report.errors().next().unwrap();
        assert_eq!(key.as_str(), "clusters/development/versions");
        assert_eq!(error.status(), Some(403));
        assert!(use_case
            .store()
            .value("clusters/development/deploy_config")
            .is_some());
    }

    #[test]
    fn dry_run_sends_nothing() {
        let sink = RecordingEventSink::default();
        let use_case = PublishUseCase::new(MemoryKvStore::default(), node1())
            .with_events(Box::new(sink.clone()));

        let report = use_case
            .execute(&Config::default(), &PublishOptions::default().with_dry_run(true))
            .unwrap();

        assert!(report.is_success());
        assert!(report.items.iter().all(|i| matches!(i.result, Ok(None))));
        assert!(use_case.store().values.borrow().is_empty());

        let requests = sink
            .snapshot()
            .into_iter()
            .filter(|e| matches!(e, PublishEvent::Request { .. }))
            .count();
        assert_eq!(requests, 3);
    }

    #[test]
    fn hostname_failure_sends_nothing() {
        struct NoHostname;
        impl HostnameResolver for NoHostname {
            fn resolve(&self) -> KvseedResult<Hostname> {
                Err(KvseedError::HostnameResolution("uname failed".to_string()))
            }
        }

        let use_case = PublishUseCase::new(MemoryKvStore::default(), NoHostname);
        let err = use_case
            .execute(&Config::default(), &PublishOptions::default())
            .unwrap_err();

        assert!(matches!(err, KvseedError::HostnameResolution(_)));
        assert!(use_case.store().values.borrow().is_empty());
    }

    #[test]
    fn publish_single_value() {
        let use_case = PublishUseCase::new(MemoryKvStore::default(), node1());
        let key = KvKey::node(
            &Hostname::parse("node1").unwrap(),
            &crate::domain::value_objects::KeySegment::parse("slug").unwrap(),
        );

        let status = use_case.publish(&key, &json!({"cluster": "development"})).unwrap();

        assert_eq!(status, 200);
        assert_eq!(
            use_case.store().value("nodes/node1/slug"),
            Some(json!({"cluster": "development"}))
        );
    }
}
