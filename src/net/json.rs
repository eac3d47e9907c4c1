//! The `fetch_json` contract: one GET, status 200 or failure, JSON body.

use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::net::client::ReqwestTransport;
use crate::net::traits::Transport;

/// The only status treated as success.
pub const SUCCESS_STATUS: u16 = 200;

/// Issues a single GET and yields the parsed JSON body.
///
/// Payload-agnostic: any JSON value (object, array, scalar) is returned as-is.
/// The URL is not validated here; malformed URLs surface from the transport
/// as [`FetchError::Network`].
#[derive(Debug, Clone)]
pub struct HttpJsonClient<T = ReqwestTransport> {
    transport: T,
}

impl HttpJsonClient<ReqwestTransport> {
    /// Client over a default reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for HttpJsonClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> HttpJsonClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `url` and parse the body as JSON.
    ///
    /// - status 200, valid JSON: `Ok(value)`
    /// - status 200, unreadable or invalid body: [`FetchError::Network`]
    /// - any other status, 2xx included: [`FetchError::HttpStatus`]
    /// - no status received: [`FetchError::Network`]
    pub async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.transport.get(url).await.map_err(|e| {
            debug!(url = %url, error = %e, "Transport failure");
            FetchError::Network(e.to_string())
        })?;

        if response.status != SUCCESS_STATUS {
            debug!(url = %url, status = response.status, "Non-success status");
            return Err(FetchError::HttpStatus {
                code: response.status,
            });
        }

        let body = response
            .body
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            debug!(url = %url, error = %e, "Response body is not valid JSON");
            FetchError::Network(format!("invalid JSON body: {e}"))
        })?;

        debug!(url = %url, bytes = body.len(), "Fetched JSON");
        Ok(value)
    }
}
