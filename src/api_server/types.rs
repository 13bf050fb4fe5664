//! API server data structures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::fetch::RedirectTracker;

/// Shared state for the API server
pub struct ApiState<R> {
    /// Tracker used for every incoming check
    pub tracker: Arc<RedirectTracker<R>>,
}

impl<R> ApiState<R> {
    /// Wraps a tracker for sharing across requests.
    pub fn new(tracker: RedirectTracker<R>) -> Self {
        Self {
            tracker: Arc::new(tracker),
        }
    }
}

// Manual impl: cloning the state only clones the Arc, so R need not be Clone
impl<R> Clone for ApiState<R> {
    fn clone(&self) -> Self {
        Self {
            tracker: Arc::clone(&self.tracker),
        }
    }
}

/// JSON body for `POST /api/check-redirects`
#[derive(Debug, Deserialize)]
pub struct CheckRedirectsRequest {
    /// URL to trace
    pub url: String,
}

/// JSON body for rejected requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Reason the request was rejected
    pub error: String,
}
