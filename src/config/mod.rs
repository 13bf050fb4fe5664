//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (hop limit, timeout, user agent)
//! - HTTP header name constants
//! - Tracker configuration and CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Command, LogFormat, LogLevel, Opt, TrackerConfig};
