//! Reqwest-backed transport.

use reqwest::redirect::Policy;
use reqwest::{Client, ClientBuilder};

use crate::net::traits::{RawResponse, Transport, TransportError};

/// Default user agent for the application.
pub const USER_AGENT: &str = concat!("indicators/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] backed by a shared [`reqwest::Client`].
///
/// Redirects are not followed, so a 3xx reaches the caller as a status like
/// any other non-200 answer. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Create a transport with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new builder.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.inner.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| TransportError::Body(e.to_string()));

        Ok(RawResponse { status, body })
    }
}

/// Map a reqwest error to our [`TransportError`].
fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else if err.is_builder() {
        TransportError::Request(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

/// Builder for [`ReqwestTransport`].
pub struct ReqwestTransportBuilder {
    builder: ClientBuilder,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            builder: Client::builder()
                .user_agent(USER_AGENT)
                .redirect(Policy::none()),
        }
    }
}

impl ReqwestTransportBuilder {
    /// Set a custom user agent.
    pub fn user_agent(mut self, ua: &str) -> Self {
        self.builder = self.builder.user_agent(ua);
        self
    }

    /// Build the transport.
    pub fn build(self) -> ReqwestTransport {
        let inner = match self.builder.build() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to build HTTP client with custom config: {}; using defaults", e);
                // The fallback must not follow redirects either.
                Client::builder()
                    .redirect(Policy::none())
                    .build()
                    .unwrap_or_default()
            }
        };
        ReqwestTransport { inner }
    }
}
