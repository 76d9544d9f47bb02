//! kvseed - seed node and cluster metadata into a Consul KV store
//!
//! A node registers itself under `nodes/{hostname}/{app}` and publishes its
//! cluster's version map and deploy config under `clusters/{cluster}/...`.
//! The records are plain JSON documents written through the Consul
//! `/v1/kv/` HTTP API.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{
    ClearOptions, ClearUseCase, PublishOptions, PublishReport, PublishUseCase, VerifyReport,
    VerifyUseCase,
};
pub use config::Config;
pub use domain::entities::{DeployConfig, NodeDescriptor, VersionMap};
pub use domain::value_objects::{Hostname, KeySegment, KvKey};
pub use error::{KvseedError, KvseedResult};
