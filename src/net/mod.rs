//! Shared networking infrastructure.

pub mod client;
pub mod json;

pub mod traits;

pub use client::{ReqwestTransport, ReqwestTransportBuilder};
pub use json::HttpJsonClient;
pub use traits::{RawResponse, Transport, TransportError};
