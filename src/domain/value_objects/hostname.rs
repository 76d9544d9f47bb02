//! Hostname Value Object

use std::fmt;

use super::KeySegment;
use crate::error::KvseedResult;

/// The name this node registers under.
///
/// Resolved once per run. A hostname is used as a single key segment, so it
/// follows the same rules as any other segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(KeySegment);

impl Hostname {
    /// Validate a hostname, trimming the trailing newline some resolvers leave
    pub fn parse(raw: &str) -> KvseedResult<Self> {
        KeySegment::parse(raw.trim()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
