//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to obtain a response for a single hop.
///
/// Produced by an [`HttpRequester`](crate::HttpRequester) implementation. The
/// real requester derives it from `reqwest::Error` via
/// [`categorize_reqwest_error`](super::categorize_reqwest_error).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequesterError {
    /// The request did not complete within the per-request timeout.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other failure while sending the request or reading the response head.
    #[error("{0}")]
    Request(String),
}

/// Reasons a redirect walk ends without reaching a terminal response.
///
/// The `Display` text is exactly what lands in `RedirectResult::error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The current URL could not be turned into a request (malformed URL or
    /// unsupported scheme). No step is recorded for this hop.
    #[error("Failed to create request: {0}")]
    RequestConstruction(String),

    /// The request was built but no response arrived. No step is recorded.
    #[error("Request failed: {0}")]
    Transport(#[from] RequesterError),

    /// A 3xx response carried no usable `Location`. The step is recorded.
    #[error("Redirect response without Location header")]
    MissingLocationHeader,

    /// Every allowed hop returned a redirect.
    #[error("Too many redirects (possible infinite loop)")]
    TooManyRedirects,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_error_messages() {
        assert_eq!(
            TraceError::MissingLocationHeader.to_string(),
            "Redirect response without Location header"
        );
        assert_eq!(
            TraceError::TooManyRedirects.to_string(),
            "Too many redirects (possible infinite loop)"
        );
        assert_eq!(
            TraceError::RequestConstruction("relative URL without a base".into()).to_string(),
            "Failed to create request: relative URL without a base"
        );
    }

    #[test]
    fn test_transport_error_wraps_requester_error() {
        let err: TraceError = RequesterError::Timeout("after 30s".into()).into();
        assert_eq!(err.to_string(), "Request failed: timed out: after 30s");

        let err: TraceError = RequesterError::Connect("refused".into()).into();
        assert_eq!(err.to_string(), "Request failed: connection failed: refused");

        let err: TraceError = RequesterError::Request("bad response".into()).into();
        assert_eq!(err.to_string(), "Request failed: bad response");
    }
}
