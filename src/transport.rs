//! Registry Transport Layer
//!
//! This module defines the transport seam between the admission core and
//! the network. The transport is responsible only for delivering a
//! serialized request body to the registry and reporting the outcome;
//! admission and serialization concerns live with the client.

use crate::error::SubmissionError;
use async_trait::async_trait;
use std::time::Duration;

/// The fixed registry endpoint for document creation
pub const REGISTRY_URL: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

/// Default request timeout for the HTTP transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of one transport attempt
///
/// Distinguishes 2xx success from any other status; outright I/O
/// failures surface as errors from the transport instead.
#[derive(Debug, Clone)]
pub struct TransportOutcome {
    /// HTTP status code returned by the registry
    pub status: u16,

    /// Response body (kept for diagnostics on rejection)
    pub body: String,
}

impl TransportOutcome {
    /// Whether the registry accepted the submission
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait for registry submissions
///
/// Implemented by [`HttpTransport`] for production and by in-memory
/// mocks in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single POST of the serialized request body
    ///
    /// Exactly one network call per invocation; no internal retries.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Transport`] if the network call fails
    /// outright (connect error, timeout, unreadable body).
    async fn post_document(&self, body: String) -> Result<TransportOutcome, SubmissionError>;
}

/// HTTP transport for the CRPT registry
///
/// POSTs JSON bodies to the fixed registry endpoint. The URL is not a
/// call-time parameter; the [`with_url`](Self::with_url) builder exists
/// so tests can point at a local server.
pub struct HttpTransport {
    /// Reqwest HTTP client
    client: reqwest::Client,

    /// Registry endpoint URL
    url: String,

    /// Request timeout
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport targeting the production registry endpoint
    pub fn new() -> Self {
        Self::with_url(REGISTRY_URL)
    }

    /// Create a transport targeting a specific endpoint URL
    pub fn with_url(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to rebuild HTTP client");
        self
    }

    /// Get the endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_document(&self, body: String) -> Result<TransportOutcome, SubmissionError> {
        tracing::debug!(url = %self.url, bytes = body.len(), "posting document to registry");

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, "registry responded");

        Ok(TransportOutcome { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transport_targets_registry() {
        let transport = HttpTransport::new();
        assert_eq!(transport.url(), REGISTRY_URL);
        assert_eq!(transport.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_with_url() {
        let transport = HttpTransport::with_url("http://localhost:3000/documents");
        assert_eq!(transport.url(), "http://localhost:3000/documents");
    }

    #[test]
    fn test_with_timeout() {
        let transport = HttpTransport::new().with_timeout(Duration::from_secs(60));
        assert_eq!(transport.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_outcome_success_boundaries() {
        let ok = |status| TransportOutcome {
            status,
            body: String::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(204).is_success());
        assert!(ok(299).is_success());
        assert!(!ok(199).is_success());
        assert!(!ok(302).is_success());
        assert!(!ok(401).is_success());
        assert!(!ok(500).is_success());
    }

    #[test]
    fn test_transport_trait_bounds() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpTransport>();
    }
}
