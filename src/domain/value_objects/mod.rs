//! Domain Value Objects
//!
//! Immutable, validated values used to build key paths.

mod hostname;
mod kv_key;

pub use hostname::Hostname;
pub use kv_key::{KeySegment, KvKey};
