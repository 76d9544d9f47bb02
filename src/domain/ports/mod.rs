//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod hostname_resolver;
pub mod kv_store;
pub mod publish_events;

pub use hostname_resolver::{FixedHostname, HostnameResolver};
pub use kv_store::KvStore;
pub use publish_events::{NoopEventSink, PublishEvent, PublishEventSink};
