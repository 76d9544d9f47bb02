//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `consul/` - Key-value store over the Consul HTTP API
//! - `hostname` - OS hostname lookup
//! - `events/` - Event sinks (console, NDJSON)

pub mod consul;
pub mod events;
pub mod hostname;

// Re-export for convenience
pub use consul::ConsulKvStore;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use hostname::SystemHostname;
