//! Per-key outcomes collected by the use cases

use crate::domain::ports::{PublishEvent, PublishEventSink};
use crate::domain::value_objects::{Hostname, KvKey};
use crate::error::{KvseedError, KvseedResult};

/// What happened to one key
#[derive(Debug)]
pub struct ItemOutcome<T> {
    pub key: KvKey,
    pub result: KvseedResult<T>,
}

/// Result of running one command against the store
#[derive(Debug)]
pub struct Report<T> {
    pub hostname: Hostname,
    pub items: Vec<ItemOutcome<T>>,
    pub dry_run: bool,
}

/// PUT statuses; `None` when nothing was sent (dry run)
pub type PublishReport = Report<Option<u16>>;
/// Whether each stored record equals the local one
pub type VerifyReport = Report<bool>;
/// DELETE statuses; `None` when nothing was sent (dry run)
pub type ClearReport = Report<Option<u16>>;

impl<T> Report<T> {
    pub fn new(hostname: Hostname, dry_run: bool) -> Self {
        Self {
            hostname,
            items: Vec::new(),
            dry_run,
        }
    }

    pub fn is_success(&self) -> bool {
        self.items.iter().all(|item| item.result.is_ok())
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    pub fn errors(&self) -> impl Iterator<Item = (&KvKey, &KvseedError)> {
        self.items
            .iter()
            .filter_map(|item| item.result.as_ref().err().map(|e| (&item.key, e)))
    }

    pub(crate) fn push(&mut self, key: KvKey, result: KvseedResult<T>) {
        self.items.push(ItemOutcome { key, result });
    }

    pub(crate) fn emit_completed(&self, command: &'static str, events: &dyn PublishEventSink) {
        events.on_event(PublishEvent::Completed {
            command,
            succeeded: self.succeeded(),
            failed: self.failed(),
            dry_run: self.dry_run,
        });
    }
}

/// Emit the failure event for a key
pub(crate) fn emit_failure(
    events: &dyn PublishEventSink,
    index: usize,
    key: &KvKey,
    error: &KvseedError,
) {
    tracing::debug!(%key, %error, "store operation failed");
    events.on_event(PublishEvent::Failed {
        index,
        key: key.to_string(),
        error: error.to_string(),
        status: error.status(),
    });
}
