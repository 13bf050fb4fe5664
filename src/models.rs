//! Redirect walk records.
//!
//! Both records are built fresh for every traced URL and serialize to the JSON
//! shape returned by the API and the `trace` command.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of one hop in a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectStep {
    /// URL requested for this hop
    pub url: String,
    /// HTTP status code observed
    pub status_code: u16,
    /// Request method (always `GET`)
    pub method: String,
    /// Tracked response headers that were present, keyed by canonical name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Local time the response arrived, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

/// Outcome of tracing one URL.
///
/// `total_steps` always equals `steps.len()` and at most one of `success` or
/// `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectResult {
    /// URL as supplied by the caller
    pub original_url: String,
    /// URL in effect when the walk stopped
    pub final_url: String,
    /// Hops in the order they were made
    pub steps: Vec<RedirectStep>,
    /// Number of recorded hops
    pub total_steps: usize,
    /// Formatted wall-clock time of the whole walk
    pub total_duration: String,
    /// Whether a non-redirect response was reached
    pub success: bool,
    /// Why the walk stopped early, if it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RedirectResult {
    /// Status code of the last recorded hop.
    pub fn final_status(&self) -> Option<u16> {
        self.steps.last().map(|step| step.status_code)
    }
}
