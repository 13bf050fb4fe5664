//! The HTTP capability the chain walker depends on.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, USER_AGENT};

use crate::config::TrackerConfig;
use crate::error_handling::{InitializationError, RequesterError};
use crate::fetch::request::HopRequest;
use crate::initialization::init_redirect_client;

/// Status line and headers of a single hop's response.
#[derive(Debug, Clone, Default)]
pub struct HopResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
}

/// Issues a single HTTP request and reports the raw response.
///
/// Implementations must NOT follow redirects: a 3xx response has to come back
/// as-is so the walker can record it and resolve the `Location` itself.
pub trait HttpRequester: Send + Sync {
    /// Sends `request`, giving up after `timeout`.
    fn execute(
        &self,
        request: HopRequest,
        timeout: Duration,
    ) -> impl Future<Output = Result<HopResponse, RequesterError>> + Send;
}

/// [`HttpRequester`] backed by a shared `reqwest::Client`.
///
/// The client is injected rather than global so independent trackers never
/// share hidden state. It must be built with redirects disabled, as
/// [`init_redirect_client`] does.
#[derive(Debug, Clone)]
pub struct ReqwestRequester {
    client: Arc<reqwest::Client>,
}

impl ReqwestRequester {
    /// Wraps an existing client. The client must not follow redirects.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    /// Builds a redirect-disabled client from the tracker configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &TrackerConfig) -> Result<Self, InitializationError> {
        Ok(Self::new(init_redirect_client(config)?))
    }
}

impl HttpRequester for ReqwestRequester {
    async fn execute(
        &self,
        request: HopRequest,
        timeout: Duration,
    ) -> Result<HopResponse, RequesterError> {
        let response = self
            .client
            .request(request.method, request.url)
            .header(USER_AGENT, request.user_agent)
            .timeout(timeout)
            .send()
            .await?;

        // The body is never read; dropping the response releases the connection
        Ok(HopResponse {
            status: response.status().as_u16(),
            headers: response.headers().clone(),
        })
    }
}
