//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, hop requests, and redirect walks
//! - Categorization of `reqwest` failures into requester errors
//!
//! A redirect walk never returns an error to its caller: [`TraceError`] values
//! are rendered into the `error` field of the result instead.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, RequesterError, TraceError};
