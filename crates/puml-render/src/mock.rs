//! Mock transport for testing.
//!
//! Provides [`MockTransport`] for exercising rendering without a network.

use std::sync::RwLock;

use crate::transport::{Transport, TransportError};

/// In-memory [`Transport`] that records every requested URL.
///
/// # Example
///
/// ```ignore
/// use puml_render::{MockTransport, Transport};
///
/// let transport = MockTransport::responding(b"\x89PNG".to_vec());
/// let body = transport.fetch("https://example.com/png/abc").unwrap();
///
/// assert_eq!(body, b"\x89PNG");
/// assert_eq!(transport.call_count(), 1);
/// ```
#[derive(Debug)]
pub struct MockTransport {
    response: Result<Vec<u8>, TransportError>,
    requests: RwLock<Vec<String>>,
}

impl MockTransport {
    /// Mock that answers every request with `body`.
    #[must_use]
    pub fn responding(body: Vec<u8>) -> Self {
        Self {
            response: Ok(body),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Mock that fails every request with `error`.
    #[must_use]
    pub fn failing(error: TransportError) -> Self {
        Self {
            response: Err(error),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Number of requests made so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.read().unwrap().len()
    }

    /// URLs requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.write().unwrap().push(url.to_owned());
        self.response.clone()
    }
}
