//! Token endpoint and routing edge cases

use axum::http::StatusCode;
use chatline::backend::auth::JwtAuth;
use chatline::shared::AppConfig;
use serde_json::json;

use crate::common::*;

fn dev_config() -> AppConfig {
    AppConfig::builder()
        .notify_delay(std::time::Duration::ZERO)
        .dev_mode(true)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_dev_token_opens_query_endpoint() {
    let (state, app) = test_app(dev_config());

    let (status, body) = send(&app, get("/api/test/generate-token", None)).await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token string").to_string();

    let claims = state.auth.authenticate(&token).unwrap();
    assert_eq!(claims.username, "test-user-123");
    assert_eq!(claims.role, "admin");

    let (status, _) = send(&app, get("/api/messages", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_dev_token_unavailable_outside_development() {
    let (_state, app) = test_app(test_config());

    let (status, body) = send(&app, get("/api/test/generate-token", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "Not available");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let (_state, app) = test_app(test_config());
    let foreign = JwtAuth::new("another-secret", std::time::Duration::from_secs(60))
        .issue("mallory", "admin")
        .unwrap();

    let (status, body) = send(&app, get("/api/messages", Some(&foreign))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "Unauthorized - Invalid or expired token");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let (_state, app) = test_app(test_config());

    let (status, body) = send(&app, get("/api/nope", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
