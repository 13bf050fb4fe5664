// Shared test helpers: local HTTP servers that emit real redirect chains.
//
// Each server binds 127.0.0.1:0 so tests can run in parallel without port clashes.

use std::time::Duration;

use axum::{
    extract::Path,
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use redirect_monitor::api_server::{router, ApiState};
use redirect_monitor::{RedirectTracker, ReqwestRequester, TrackerConfig};

/// Serves `app` on an ephemeral local port and returns its base URL.
#[allow(dead_code)] // Not every test file uses every helper
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    url
}

/// Starts a server with these routes:
///
/// - `/start` -> 301 to `/middle` (relative)
/// - `/middle` -> 302 to `{base}/end` (absolute)
/// - `/end` -> 200 with `Server` and `Cache-Control`
/// - `/loop` -> 302 to `/loop`
/// - `/countdown/{n}` -> 307 to `/countdown/{n-1}`, 200 at zero
/// - `/broken` -> 302 without `Location`
/// - `/nested/a/b` -> 308 to `c`, which resolves to `/nested/a/c` -> 200
/// - `/slow` -> 200 after two seconds
/// - `/echo-agent` -> 200 echoing the request's User-Agent in `X-Seen-User-Agent`
#[allow(dead_code)] // Not every test file uses every helper
pub async fn start_redirect_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let base = format!("http://{}", addr);
    let end_url = format!("{}/end", base);

    let app = Router::new()
        .route(
            "/start",
            get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/middle")]) }),
        )
        .route(
            "/middle",
            get(move || async move { (StatusCode::FOUND, [(header::LOCATION, end_url)]) }),
        )
        .route(
            "/end",
            get(|| async {
                (
                    StatusCode::OK,
                    [
                        (header::SERVER, "test-server"),
                        (header::CACHE_CONTROL, "no-store"),
                    ],
                    "Final Destination",
                )
            }),
        )
        .route(
            "/loop",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/loop")]) }),
        )
        .route(
            "/countdown/{n}",
            get(|Path(n): Path<usize>| async move {
                if n > 0 {
                    (
                        StatusCode::TEMPORARY_REDIRECT,
                        [(header::LOCATION, format!("/countdown/{}", n - 1))],
                    )
                        .into_response()
                } else {
                    "Final Destination".into_response()
                }
            }),
        )
        .route("/broken", get(|| async { StatusCode::FOUND }))
        .route(
            "/nested/a/b",
            get(|| async { (StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, "c")]) }),
        )
        .route("/nested/a/c", get(|| async { "Nested Destination" }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "Too Late"
            }),
        )
        .route(
            "/echo-agent",
            get(|headers: HeaderMap| async move {
                let agent = headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                (
                    StatusCode::OK,
                    [(HeaderName::from_static("x-seen-user-agent"), agent)],
                )
            }),
        );

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    base
}

/// Builds a tracker backed by a real redirect-disabled `reqwest` client.
#[allow(dead_code)] // Not every test file uses every helper
pub fn real_tracker(config: TrackerConfig) -> RedirectTracker<ReqwestRequester> {
    let requester = ReqwestRequester::from_config(&config).expect("Failed to build HTTP client");
    RedirectTracker::new(requester, config)
}

/// Starts the redirect check API with a real tracker and returns its base URL.
#[allow(dead_code)] // Not every test file uses every helper
pub async fn start_api(config: TrackerConfig) -> String {
    serve(router(ApiState::new(real_tracker(config)))).await
}
