//! JSON Event Sink
//!
//! Outputs store events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PublishEvent, PublishEventSink};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Request bodies are JSON documents; embed them as structured values
fn body_value(body: Option<String>) -> Value {
    match body {
        Some(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
        None => Value::Null,
    }
}

impl PublishEventSink for JsonEventSink {
    fn on_event(&self, event: PublishEvent) {
        let json = match event {
            PublishEvent::Started {
                command,
                hostname,
                store,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "version": env!("CARGO_PKG_VERSION"),
                "hostname": hostname,
                "store": store,
            }),

            PublishEvent::Request {
                index,
                method,
                url,
                body,
            } => serde_json::json!({
                "event": "request",
                "index": index,
                "method": method,
                "url": url,
                "body": body_value(body),
            }),

            PublishEvent::Succeeded { index, key, status } => serde_json::json!({
                "event": "item_ok",
                "index": index,
                "key": key,
                "status": status,
            }),

            PublishEvent::Failed {
                index,
                key,
                error,
                status,
            } => serde_json::json!({
                "event": "item_error",
                "index": index,
                "key": key,
                "error": error,
                "status": status,
            }),

            PublishEvent::Verified {
                index,
                key,
                matches_local,
            } => serde_json::json!({
                "event": "item_verified",
                "index": index,
                "key": key,
                "matches_local": matches_local,
            }),

            PublishEvent::Completed {
                command,
                succeeded,
                failed,
                dry_run,
            } => {
                let status = match (failed, succeeded) {
                    (0, _) => "success",
                    (_, 0) => "failed",
                    _ => "partial",
                };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "succeeded": succeeded,
                    "failed": failed,
                    "dry_run": dry_run,
                })
            }
        };

        self.write_event(json);
    }
}
