//! Error types for kvseed
//!
//! Library code returns `KvseedError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kvseed operations
pub type KvseedResult<T> = Result<T, KvseedError>;

/// Main error type for kvseed operations
#[derive(Error, Debug)]
pub enum KvseedError {
    /// The local hostname could not be determined
    #[error("could not resolve local hostname: {0}")]
    HostnameResolution(String),

    /// A key segment (hostname, app slug, cluster) cannot be used in a key path
    #[error("invalid key segment '{segment}': {reason}")]
    InvalidKeySegment { segment: String, reason: &'static str },

    /// A record could not be encoded as JSON
    #[error("could not encode record as JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store did not answer (connection refused, DNS, timeout)
    #[error("key-value store unreachable at {url}: {source}")]
    StoreUnreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be set up
    #[error("could not set up HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("key-value store rejected {url} with status {status}")]
    StoreRejected {
        url: String,
        status: u16,
        body: String,
    },

    /// A record read back from the store does not have the expected shape
    #[error("{message}")]
    InvalidRecord { key: String, message: String },

    /// Configuration file or value is invalid
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KvseedError {
    /// Short machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            KvseedError::HostnameResolution(_) => "hostname_resolution",
            KvseedError::InvalidKeySegment { .. } => "invalid_key_segment",
            KvseedError::Serialization(_) => "serialization",
            KvseedError::StoreUnreachable { .. } => "store_unreachable",
            KvseedError::HttpClient(_) => "http_client",
            KvseedError::StoreRejected { .. } => "store_rejected",
            KvseedError::InvalidRecord { .. } => "invalid_record",
            KvseedError::InvalidConfig { .. } => "invalid_config",
            KvseedError::Io(_) => "io",
        }
    }

    /// HTTP status carried by the error, if the store answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            KvseedError::StoreRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
