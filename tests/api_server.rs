//! Integration tests for the redirect check HTTP API.

mod helpers;

use serde_json::{json, Value};

use helpers::{start_api, start_redirect_server};
use redirect_monitor::{RedirectResult, TrackerConfig};

async fn post_check(api: &str, body: String) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/api/check-redirects", api))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .expect("API request failed");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("API returned non-JSON");
    (status, body)
}

#[tokio::test]
async fn test_check_redirects_returns_trace_result() {
    let target = start_redirect_server().await;
    let api = start_api(TrackerConfig::default()).await;

    let (status, body) = post_check(
        &api,
        json!({ "url": format!("{}/start", target) }).to_string(),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_steps"], 3);
    assert_eq!(body["final_url"], format!("{}/end", target));
    assert!(body.get("error").is_none());

    let result: RedirectResult =
        serde_json::from_value(body).expect("body should match the result shape");
    assert_eq!(result.steps[0].status_code, 301);
    assert_eq!(result.steps[0].method, "GET");
    assert_eq!(result.total_steps, result.steps.len());
}

#[tokio::test]
async fn test_check_redirects_reports_failed_walk_with_ok_status() {
    let target = start_redirect_server().await;
    let api = start_api(TrackerConfig::default()).await;

    let (status, body) = post_check(
        &api,
        json!({ "url": format!("{}/broken", target) }).to_string(),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Redirect response without Location header");
    assert_eq!(body["total_steps"], 1);
}

#[tokio::test]
async fn test_check_redirects_rejects_malformed_json() {
    let api = start_api(TrackerConfig::default()).await;

    let (status, body) = post_check(&api, "{not json".to_string()).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid request format");
}

#[tokio::test]
async fn test_check_redirects_rejects_missing_url() {
    let api = start_api(TrackerConfig::default()).await;

    let (status, body) = post_check(&api, json!({ "link": "http://a.com" }).to_string()).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid request format");

    let (status, body) = post_check(&api, json!({ "url": "" }).to_string()).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid request format");
}

#[tokio::test]
async fn test_check_redirects_rejects_unparseable_url() {
    let api = start_api(TrackerConfig::default()).await;

    let (status, body) = post_check(&api, json!({ "url": "not a url" }).to_string()).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid URL format");
}

#[tokio::test]
async fn test_check_redirects_whitespace_url_is_validated_as_url() {
    let api = start_api(TrackerConfig::default()).await;

    let (status, body) = post_check(&api, json!({ "url": "   " }).to_string()).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid URL format");
}

#[tokio::test]
async fn test_check_redirects_unsupported_scheme_is_traced_as_failure() {
    let api = start_api(TrackerConfig::default()).await;

    let (status, body) = post_check(
        &api,
        json!({ "url": "ftp://files.example.com/a.txt" }).to_string(),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], false);
    assert_eq!(body["total_steps"], 0);
    assert_eq!(
        body["error"],
        "Failed to create request: unsupported protocol scheme \"ftp\""
    );
    assert_eq!(body["final_url"], "ftp://files.example.com/a.txt");
}
