//! OS hostname lookup

use crate::domain::ports::HostnameResolver;
use crate::domain::value_objects::Hostname;
use crate::error::{KvseedError, KvseedResult};

/// Resolves the hostname the way `hostname(1)` would
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameResolver for SystemHostname {
    fn resolve(&self) -> KvseedResult<Hostname> {
        let raw = system_hostname()?;
        tracing::debug!(hostname = %raw, "resolved system hostname");
        Hostname::parse(&raw).map_err(|e| KvseedError::HostnameResolution(e.to_string()))
    }
}

#[cfg(unix)]
fn system_hostname() -> KvseedResult<String> {
    let name = nix::unistd::gethostname()
        .map_err(|errno| KvseedError::HostnameResolution(errno.desc().to_string()))?;

    name.into_string().map_err(|raw| {
        KvseedError::HostnameResolution(format!("hostname {:?} is not valid UTF-8", raw))
    })
}

#[cfg(not(unix))]
fn system_hostname() -> KvseedResult<String> {
    std::env::var("COMPUTERNAME")
        .or_else(|_| std::env::var("HOSTNAME"))
        .map_err(|_| {
            KvseedError::HostnameResolution("neither COMPUTERNAME nor HOSTNAME is set".to_string())
        })
}
