//! HTTP API for redirect checks.
//!
//! Provides one endpoint:
//! - `POST /api/check-redirects` - traces the `url` in the JSON body and returns
//!   the redirect result as JSON

mod handlers;
mod types;

use axum::routing::post;
use axum::Router;

use crate::config::CHECK_REDIRECTS_ROUTE;
use crate::fetch::HttpRequester;
use handlers::check_redirects_handler;
pub use types::{ApiState, CheckRedirectsRequest, ErrorResponse};

/// Builds the API router.
pub fn router<R>(state: ApiState<R>) -> Router
where
    R: HttpRequester + 'static,
{
    Router::new()
        .route(CHECK_REDIRECTS_ROUTE, post(check_redirects_handler::<R>))
        .with_state(state)
}

/// Binds `bind_addr` and serves the API until the process exits.
pub async fn start_api_server<R>(bind_addr: &str, state: ApiState<R>) -> Result<(), anyhow::Error>
where
    R: HttpRequester + 'static,
{
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", bind_addr, e))?;

    let local_addr = listener.local_addr()?;
    log::info!("API server listening on http://{}/", local_addr);
    log::info!(
        "  - Check redirects: POST http://{}{}",
        local_addr,
        CHECK_REDIRECTS_ROUTE
    );

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
