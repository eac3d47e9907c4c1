//! Error taxonomy for indicator fetches.
//!
//! Every failure a call site can observe is one of three kinds: the server
//! answered with a non-200 status, the transport or body decoding failed, or
//! the payload did not have the shape an extraction expected.

/// Failure of a single `fetch_json` call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The transport completed but the status was not 200.
    #[error("Error: {code}")]
    HttpStatus { code: u16 },

    /// No status was received, or the 200 body was not valid JSON.
    #[error("Error de red: {0}")]
    Network(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Failure to read `serie[0].valor` out of an indicator payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PayloadShapeError {
    #[error("payload has no `serie` array")]
    MissingSeries,

    #[error("`serie` is empty")]
    EmptySeries,

    #[error("first `serie` entry has no `valor`")]
    MissingValue,

    #[error("first `serie` entry `valor` is not a number")]
    NonNumericValue,
}

/// The single error type handed to a call site's failure handler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndicatorError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    PayloadShape(#[from] PayloadShapeError),
}

impl IndicatorError {
    /// Short label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(FetchError::HttpStatus { .. }) => "http_status",
            Self::Fetch(FetchError::Network(_)) => "network",
            Self::PayloadShape(_) => "payload_shape",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_matches_console_format() {
        let err = FetchError::HttpStatus { code: 404 };
        assert_eq!(err.to_string(), "Error: 404");
        assert!(!err.is_network());
    }

    #[test]
    fn test_network_error_display() {
        let err = FetchError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Error de red: connection refused");
        assert!(err.is_network());
    }

    #[test]
    fn test_indicator_error_is_transparent() {
        let err: IndicatorError = FetchError::HttpStatus { code: 500 }.into();
        assert_eq!(err.to_string(), "Error: 500");
        assert_eq!(err.kind(), "http_status");

        let err: IndicatorError = PayloadShapeError::EmptySeries.into();
        assert_eq!(err.to_string(), "`serie` is empty");
        assert_eq!(err.kind(), "payload_shape");
    }
}
