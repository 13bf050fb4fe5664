//! redirect_monitor library: HTTP redirect chain tracing
//!
//! This library walks the redirect chain a URL produces, one request per hop
//! with automatic redirect following disabled, and records each hop's URL,
//! status code, selected response headers, and timestamp. The result reports
//! the final URL, whether a non-redirect response was reached, and how long
//! the walk took.
//!
//! # Example
//!
//! ```no_run
//! use redirect_monitor::{RedirectTracker, ReqwestRequester, TrackerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TrackerConfig {
//!     max_redirects: 10,
//!     ..Default::default()
//! };
//! let requester = ReqwestRequester::from_config(&config)?;
//! let tracker = RedirectTracker::new(requester, config);
//!
//! let result = tracker.trace("http://example.com").await;
//! for step in &result.steps {
//!     println!("{} {}", step.status_code, step.url);
//! }
//! println!("final: {} ({})", result.final_url, result.total_duration);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Tracing is async and requires a Tokio runtime.

#![warn(missing_docs)]

pub mod api_server;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod utils;

// Re-export public API
pub use config::{LogFormat, LogLevel, TrackerConfig};
pub use error_handling::{categorize_reqwest_error, InitializationError, RequesterError, TraceError};
pub use fetch::{
    extract_tracked_headers, is_redirect, resolve_location, HopRequest, HopResponse,
    HttpRequester, RedirectTracker, ReqwestRequester,
};
pub use models::{RedirectResult, RedirectStep};
pub use utils::format_duration;
