//! HTTP transport for `PlantUML` server requests.
//!
//! [`Transport`] is the seam between rendering and the network. The
//! production implementation is [`HttpTransport`], backed by a ureq agent.
//! Each call is a single GET with no retry.

use std::time::Duration;

use ureq::Agent;

/// Fetches the body of a URL.
pub trait Transport {
    /// Perform one GET request and return the full response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// Failure talking to the rendering server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connection, TLS, DNS or timeout failure.
    #[error("request failed: {0}")]
    Request(String),
    /// Server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// [`Transport`] over HTTP(S) using ureq.
#[derive(Debug)]
pub struct HttpTransport {
    agent: Agent,
}

impl HttpTransport {
    /// Create a transport with an optional global timeout.
    ///
    /// `None` leaves ureq's defaults in place.
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let mut body = response.into_body();

        if !status.is_success() {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        body.with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
