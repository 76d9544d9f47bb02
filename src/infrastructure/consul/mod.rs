//! Consul KV Store
//!
//! Talks to the `/v1/kv/` HTTP API with a blocking client. One request per
//! operation, no retries, no auth headers.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use crate::domain::ports::KvStore;
use crate::domain::value_objects::KvKey;
use crate::error::{KvseedError, KvseedResult};

/// Consul-compatible key-value store client
pub struct ConsulKvStore {
    base: Url,
    client: Client,
}

impl ConsulKvStore {
    /// Create a client for the store at `base` (e.g. `http://localhost:8500/`)
    pub fn new(base: Url, timeout: Duration) -> KvseedResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(KvseedError::HttpClient)?;

        Ok(Self { base, client })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/v1/kv/{key}`, each key segment percent-encoded
    fn key_url(&self, key: &KvKey, query: Option<&str>) -> KvseedResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| KvseedError::InvalidConfig {
                file: "store.host".into(),
                message: format!("{} cannot be used as a base URL", self.base),
            })?
            .pop_if_empty()
            .extend(["v1", "kv"])
            .extend(key.as_str().split('/'));
        url.set_query(query);
        Ok(url)
    }

    fn send(
        &self,
        url: &Url,
        request: reqwest::blocking::RequestBuilder,
    ) -> KvseedResult<Response> {
        request.send().map_err(|source| KvseedError::StoreUnreachable {
            url: url.to_string(),
            source,
        })
    }
}

/// Turn a non-2xx answer into `StoreRejected`
fn check_status(url: &Url, response: Response) -> KvseedResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    tracing::debug!(%url, status = status.as_u16(), %body, "store rejected request");
    Err(KvseedError::StoreRejected {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}

impl KvStore for ConsulKvStore {
    fn location(&self) -> String {
        self.base.to_string()
    }

    fn url_for(&self, key: &KvKey) -> String {
        self.key_url(key, None)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}v1/kv/{}", self.base, key))
    }

    fn put(&self, key: &KvKey, body: &[u8]) -> KvseedResult<u16> {
        let url = self.key_url(key, None)?;
        tracing::debug!(%url, bytes = body.len(), "PUT");

        let request = self
            .client
            .put(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec());
        let response = check_status(&url, self.send(&url, request)?)?;

        Ok(response.status().as_u16())
    }

    fn get(&self, key: &KvKey) -> KvseedResult<Option<Vec<u8>>> {
        let url = self.key_url(key, Some("raw"))?;
        tracing::debug!(%url, "GET");

        let response = self.send(&url, self.client.get(url.clone()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let bytes = check_status(&url, response)?
            .bytes()
            .map_err(|source| KvseedError::StoreUnreachable {
                url: url.to_string(),
                source,
            })?;
        Ok(Some(bytes.to_vec()))
    }

    fn delete_tree(&self, key: &KvKey) -> KvseedResult<u16> {
        let url = self.key_url(key, Some("recurse"))?;
        tracing::debug!(%url, "DELETE");

        let response = check_status(&url, self.send(&url, self.client.delete(url.clone()))?)?;
        Ok(response.status().as_u16())
    }
}
