//! HTTP redirect chain resolution.
//!
//! This module follows redirect chains manually, one request per hop, so that
//! every intermediate response is recorded from the initial URL to the final
//! destination (or to the point where the chain broke).

use std::time::Instant;

use log::{debug, info, warn};
use url::Url;

use crate::config::{TrackerConfig, STEP_TIMESTAMP_FORMAT, TRACE_METHOD};
use crate::error_handling::TraceError;
use crate::fetch::request::{extract_tracked_headers, location_header, HopRequest};
use crate::fetch::requester::HttpRequester;
use crate::models::{RedirectResult, RedirectStep};
use crate::utils::format_duration;

/// Walks redirect chains with an injected [`HttpRequester`].
///
/// The tracker holds no per-walk state, so one instance can serve any number
/// of concurrent [`trace`](Self::trace) calls.
///
/// # Examples
///
/// ```no_run
/// use redirect_monitor::{RedirectTracker, ReqwestRequester, TrackerConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TrackerConfig::default();
/// let tracker = RedirectTracker::new(ReqwestRequester::from_config(&config)?, config);
///
/// let result = tracker.trace("http://example.com").await;
/// println!("{} -> {} in {} hops", result.original_url, result.final_url, result.total_steps);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RedirectTracker<R> {
    requester: R,
    config: TrackerConfig,
}

impl<R: HttpRequester> RedirectTracker<R> {
    /// Creates a tracker that issues requests through `requester`.
    pub fn new(requester: R, config: TrackerConfig) -> Self {
        Self { requester, config }
    }

    /// The limits this tracker walks with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Traces the redirect chain starting at `original_url`.
    ///
    /// Never fails: a broken chain is reported through `success = false` and
    /// the `error` message, with every hop completed before the failure kept in
    /// `steps`.
    pub async fn trace(&self, original_url: &str) -> RedirectResult {
        let start = Instant::now();
        let mut steps = Vec::new();
        let mut current = original_url.to_string();

        let outcome = self.walk(&mut current, &mut steps).await;

        let total_steps = steps.len();
        let (success, error) = match outcome {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        };
        let result = RedirectResult {
            original_url: original_url.to_string(),
            final_url: current,
            total_steps,
            steps,
            total_duration: format_duration(start.elapsed()),
            success,
            error,
        };

        match &result.error {
            None => info!(
                "Traced {} -> {} ({}) in {} hop(s) ({})",
                result.original_url,
                result.final_url,
                result.final_status().unwrap_or_default(),
                result.total_steps,
                result.total_duration
            ),
            Some(e) => warn!(
                "Redirect trace for {} stopped at {} after {} hop(s): {}",
                result.original_url, result.final_url, result.total_steps, e
            ),
        }

        result
    }

    /// Runs the bounded hop loop.
    ///
    /// On return `current` holds the URL in effect when the walk stopped and
    /// `steps` holds one entry per response received. `Ok` means a terminal
    /// (non-3xx) response was reached.
    async fn walk(
        &self,
        current: &mut String,
        steps: &mut Vec<RedirectStep>,
    ) -> Result<(), TraceError> {
        for hop in 0..self.config.max_redirects {
            let request = HopRequest::get(current.as_str(), &self.config.user_agent)?;
            let response = self
                .requester
                .execute(request, self.config.timeout)
                .await?;

            steps.push(RedirectStep {
                url: current.clone(),
                status_code: response.status,
                method: TRACE_METHOD.to_string(),
                headers: extract_tracked_headers(&response.headers, &self.config.tracked_headers),
                timestamp: chrono::Local::now()
                    .format(STEP_TIMESTAMP_FORMAT)
                    .to_string(),
            });
            debug!("Hop {}: {} returned {}", hop + 1, current, response.status);

            if !is_redirect(response.status) {
                return Ok(());
            }

            let location =
                location_header(&response.headers).ok_or(TraceError::MissingLocationHeader)?;
            *current = resolve_location(current.as_str(), &location);
        }

        Err(TraceError::TooManyRedirects)
    }
}

/// Whether `status` is in the 3xx range.
pub fn is_redirect(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Resolves a `Location` value against the URL that returned it.
///
/// Absolute locations are returned exactly as written. Relative references
/// (`/path`, `path`, `../path`, `//host/path`, `?query`) are resolved against
/// `base` using standard reference resolution. A value that cannot be resolved
/// is returned unchanged; the next hop then fails to build a request for it.
pub fn resolve_location(base: &str, location: &str) -> String {
    match Url::parse(location) {
        Ok(_) => location.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(base)
            .and_then(|base| base.join(location))
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| location.to_string()),
        Err(_) => location.to_string(),
    }
}
