//! The HTTP capability the pipeline consumes.
//!
//! # Design
//! `Transport` is the seam between request building and network I/O. The
//! pipeline calls `send` once per logical operation and `release_connection`
//! exactly once afterwards, whatever the outcome. `UreqTransport` is the
//! blocking default; tests plug in recording fakes.

use std::time::Duration;

use thiserror::Error;
use tracing::trace;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Failure below the HTTP status level: DNS, TLS, refused connections,
/// timeouts, truncated bodies.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Sends requests and recycles connections. Shared across threads.
pub trait Transport: Send + Sync {
    /// Perform one round trip. Every status, including 4xx and 5xx, must come
    /// back as `Ok`; `Err` is reserved for failures with no response.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Return the connection used by the last completed call to the pool.
    fn release_connection(&self);
}

/// Response bodies are read without a size cap unless one is configured.
/// Sheet exports and large sheets routinely exceed ureq's 10 MB default.
pub const DEFAULT_MAX_RESPONSE_BYTES: u64 = u64::MAX;

/// Blocking transport over a pooled `ureq::Agent`.
///
/// Bodies are read in full inside `send`, which hands the connection back to
/// the agent's pool; `release_connection` therefore has nothing left to free.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    max_response_bytes: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self {
            agent,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    /// Refuse response bodies longer than `limit` bytes.
    pub fn with_max_response_bytes(mut self, limit: u64) -> Self {
        self.max_response_bytes = limit;
        self
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();
        let body = request.body.as_ref().map(|b| b.content.as_slice());

        let result = match (request.method, body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(url), headers).send(body),
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(url), headers).send(body),
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), headers).send_empty(),
        };
        let mut response = result.map_err(|e| {
            TransportError::with_source(format!("{} {} failed", request.method, url), e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_response_bytes)
            .read_to_vec()
            .map_err(|e| TransportError::with_source("failed to read response body", e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn release_connection(&self) {
        trace!("connection returned to pool");
    }
}
