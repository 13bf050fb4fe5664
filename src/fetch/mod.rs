//! Redirect chain fetching.
//!
//! This module provides:
//! - Request building and tracked-header extraction (`request`)
//! - The [`HttpRequester`] capability and its `reqwest` implementation (`requester`)
//! - The chain walker, [`RedirectTracker`] (`redirects`)

mod redirects;
mod request;
mod requester;

pub use redirects::{is_redirect, resolve_location, RedirectTracker};
pub use request::{extract_tracked_headers, location_header, HopRequest};
pub use requester::{HopResponse, HttpRequester, ReqwestRequester};
