//! Domain Entities
//!
//! The three records a node publishes about itself and its cluster.

mod records;

pub use records::{DeployConfig, NodeDescriptor, VersionMap};
