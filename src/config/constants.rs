//! Configuration constants.
//!
//! Defaults for the redirect tracker and the HTTP API. Every value here can be
//! overridden through [`TrackerConfig`](super::TrackerConfig) or the CLI.

use std::time::Duration;

// Redirect handling
/// Maximum number of requests issued while walking a single redirect chain.
/// A chain that is still redirecting after this many hops is reported as a loop.
pub const MAX_REDIRECT_HOPS: usize = 20;

// Network operation timeouts
/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Per-request timeout as a `Duration`
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(REQUEST_TIMEOUT_SECS);

/// Identifying User-Agent sent with every hop.
pub const DEFAULT_USER_AGENT: &str = "Redirect-Monitor/1.0";

/// The only method the tracker issues.
pub const TRACE_METHOD: &str = "GET";

/// Format used for per-hop timestamps (second resolution, local time).
pub const STEP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// HTTP API
/// Default bind address for `redirect_monitor serve`
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Route that accepts redirect check requests
pub const CHECK_REDIRECTS_ROUTE: &str = "/api/check-redirects";
