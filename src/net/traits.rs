//! Networking traits.

use std::future::Future;

/// What a transport observed for one GET once a status line arrived.
///
/// The body is kept as its own result: a status can be received even when
/// reading the body afterwards fails.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: Result<Vec<u8>, TransportError>,
}

impl RawResponse {
    /// A response whose body was read completely.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Ok(body.into()),
        }
    }
}

/// Transport-level failure, raised before (or while) a response is received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("invalid request: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Other(String),
}

/// Trait for pluggable HTTP GET backends.
///
/// Implementations issue exactly one request per call: no retries, no
/// timeout, no extra headers beyond what the backend always sends.
pub trait Transport: Send + Sync {
    /// Send a GET to `url` and return the status and body.
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
