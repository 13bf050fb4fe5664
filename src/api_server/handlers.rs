//! API server HTTP handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::debug;

use super::types::{ApiState, CheckRedirectsRequest, ErrorResponse};
use crate::fetch::HttpRequester;

/// Traces the redirect chain of the submitted URL.
///
/// Always answers `200` with the trace result once the input is accepted, even
/// when the walk itself failed; the failure is in the result's `error` field.
/// Unreadable bodies and unparseable URLs are rejected with `400`.
pub async fn check_redirects_handler<R>(
    State(state): State<ApiState<R>>,
    payload: Result<Json<CheckRedirectsRequest>, JsonRejection>,
) -> Response
where
    R: HttpRequester + 'static,
{
    let request = match payload {
        Ok(Json(request)) if !request.url.is_empty() => request,
        Ok(_) => return bad_request("Invalid request format"),
        Err(rejection) => {
            debug!("Rejected check request: {}", rejection);
            return bad_request("Invalid request format");
        }
    };

    if let Err(e) = url::Url::parse(&request.url) {
        debug!("Rejected check request for {:?}: {}", request.url, e);
        return bad_request("Invalid URL format");
    }

    let result = state.tracker.trace(&request.url).await;
    (StatusCode::OK, Json(result)).into_response()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
