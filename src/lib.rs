pub mod config;
pub mod error;
pub mod indicators;
pub mod net;
pub mod runner;

pub use crate::error::{FetchError, IndicatorError, PayloadShapeError};
pub use crate::net::HttpJsonClient;
