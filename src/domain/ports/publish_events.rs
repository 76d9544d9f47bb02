//! Publish Event Port
//!
//! Provides an observable interface for store operations.
//! Console output, NDJSON event streams and tests all hang off this.

/// Event emitted while talking to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishEvent {
    /// Command started
    Started {
        command: &'static str,
        hostname: String,
        store: String,
    },

    /// A request is about to be sent (or, in dry-run mode, would be)
    Request {
        index: usize,
        method: &'static str,
        url: String,
        body: Option<String>,
    },

    /// The store accepted the request
    Succeeded {
        index: usize,
        key: String,
        status: u16,
    },

    /// The request failed
    Failed {
        index: usize,
        key: String,
        error: String,
        status: Option<u16>,
    },

    /// A key was read back and passed the consumer's checks
    Verified {
        index: usize,
        key: String,
        matches_local: bool,
    },

    /// Command completed
    Completed {
        command: &'static str,
        succeeded: usize,
        failed: usize,
        dry_run: bool,
    },
}

/// Trait for receiving publish events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable lines on stdout
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait PublishEventSink {
    fn on_event(&self, event: PublishEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PublishEventSink for NoopEventSink {
    fn on_event(&self, _event: PublishEvent) {}
}
