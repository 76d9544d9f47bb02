//! Key-Value Store Port
//!
//! Abstracts the remote store so the use cases can run against Consul,
//! a mock HTTP server, or an in-memory map in tests.

use crate::domain::value_objects::KvKey;
use crate::error::KvseedResult;

/// A hierarchical key-value store holding opaque byte values
pub trait KvStore {
    /// Where the store lives, for progress output
    fn location(&self) -> String;

    /// Human-readable location of a key, printed before each request
    fn url_for(&self, key: &KvKey) -> String;

    /// Store `body` under `key`, returning the HTTP status on success.
    ///
    /// Any non-2xx answer is an error.
    fn put(&self, key: &KvKey, body: &[u8]) -> KvseedResult<u16>;

    /// Read the raw value under `key`; `None` when the key does not exist
    fn get(&self, key: &KvKey) -> KvseedResult<Option<Vec<u8>>>;

    /// Delete `key` and everything below it
    fn delete_tree(&self, key: &KvKey) -> KvseedResult<u16>;
}
