//! Event Sinks
//!
//! Implementations of `PublishEventSink` for the console and for NDJSON.

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
