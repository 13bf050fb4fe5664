//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::TrackerConfig;

/// Initializes a shared HTTP client for redirect tracing.
///
/// Creates a `reqwest::Client` with redirects disabled so every hop comes back
/// to the walker, which records it and resolves `Location` itself. The timeout
/// and User-Agent from `config` act as client-wide defaults; the requester also
/// sets both per request.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &TrackerConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
