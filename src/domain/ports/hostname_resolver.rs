//! Hostname Resolver Port

use crate::domain::value_objects::Hostname;
use crate::error::KvseedResult;

/// Source of the name this node registers under
pub trait HostnameResolver {
    fn resolve(&self) -> KvseedResult<Hostname>;
}

/// Resolver that always answers with a fixed name (config override, tests)
#[derive(Debug, Clone)]
pub struct FixedHostname(pub Hostname);

impl HostnameResolver for FixedHostname {
    fn resolve(&self) -> KvseedResult<Hostname> {
        Ok(self.0.clone())
    }
}
