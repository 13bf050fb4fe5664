//! HTTP request building and header extraction.
//!
//! This module turns the walker's current URL into a [`HopRequest`] and pulls
//! the tracked headers out of each response.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, Url};

use crate::config::HEADER_LOCATION;
use crate::error_handling::TraceError;

/// A single GET request for one hop of a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopRequest {
    /// Request method (always GET)
    pub method: Method,
    /// Parsed, absolute http(s) URL
    pub url: Url,
    /// Identifying User-Agent header value
    pub user_agent: String,
}

impl HopRequest {
    /// Builds a GET request for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::RequestConstruction`] if `url` does not parse as an
    /// absolute URL or uses a scheme other than `http`/`https`.
    pub fn get(url: &str, user_agent: &str) -> Result<Self, TraceError> {
        let parsed =
            Url::parse(url).map_err(|e| TraceError::RequestConstruction(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self {
                method: Method::GET,
                url: parsed,
                user_agent: user_agent.to_string(),
            }),
            other => Err(TraceError::RequestConstruction(format!(
                "unsupported protocol scheme \"{}\"",
                other
            ))),
        }
    }
}

/// Extracts the tracked headers from an HTTP response.
///
/// Header lookup is case-insensitive; the returned map is keyed by the names as
/// given in `tracked`. Missing or empty headers are left out. Non-ASCII bytes
/// are decoded as UTF-8, with invalid sequences replaced.
///
/// # Arguments
///
/// * `headers` - The HTTP response headers
/// * `tracked` - Header names to capture
pub fn extract_tracked_headers(
    headers: &HeaderMap,
    tracked: &[String],
) -> BTreeMap<String, String> {
    tracked
        .iter()
        .filter_map(|name| {
            let value = header_text(headers.get(name.as_str())?)?;
            Some((name.clone(), value))
        })
        .collect()
}

/// Returns the `Location` header of a response, if present and non-empty.
pub fn location_header(headers: &HeaderMap) -> Option<String> {
    headers.get(HEADER_LOCATION).and_then(header_text)
}

// Servers may send raw UTF-8 (obs-text) in header values, which `to_str` rejects.
fn header_text(value: &HeaderValue) -> Option<String> {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(bytes).into_owned())
    }
}
