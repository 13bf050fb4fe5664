//! Utility functions.
//!
//! This module provides:
//! - Human-readable elapsed-time formatting

mod timing;

pub use timing::format_duration;
