//! Message query API integration tests

use axum::http::StatusCode;
use chatline::backend::server::AppState;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

fn seed(state: &AppState) {
    state.message_log.append("Alice", "Hello World").unwrap();
    state.message_log.append("bob", "hello there").unwrap();
    state.message_log.append("alice_2", "bye").unwrap();
}

fn ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .expect("data is an array")
        .iter()
        .map(|m| m["id"].as_u64().expect("numeric id"))
        .collect()
}

#[tokio::test]
async fn test_unfiltered_query_uses_defaults() {
    let (state, app) = test_app(test_config());
    seed(&state);
    let token = valid_token(&state);

    let (status, body) = send(&app, get("/api/messages", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert_eq!(
        body["pagination"],
        json!({
            "count": 3,
            "total": 3,
            "page": 1,
            "limit": 10,
            "totalPages": 1,
            "hasNextPage": false,
            "hasPreviousPage": false
        })
    );
}

#[tokio::test]
async fn test_filters_are_case_insensitive_and_combined() {
    let (state, app) = test_app(test_config());
    seed(&state);
    let token = valid_token(&state);

    let (_, body) = send(&app, get("/api/messages?user=ALICE", Some(&token))).await;
    assert_eq!(ids(&body), vec![1, 3]);

    let (_, body) = send(&app, get("/api/messages?message=HELLO", Some(&token))).await;
    assert_eq!(ids(&body), vec![1, 2]);

    let (_, body) = send(
        &app,
        get("/api/messages?user=alice&message=hello", Some(&token)),
    )
    .await;
    assert_eq!(ids(&body), vec![1]);
    assert_eq!(body["pagination"]["total"], json!(1));

    let (_, body) = send(&app, get("/api/messages?user=nobody", Some(&token))).await;
    assert_eq!(ids(&body), Vec::<u64>::new());
    assert_eq!(body["pagination"]["totalPages"], json!(0));
}

#[tokio::test]
async fn test_empty_parameters_fall_back_to_defaults() {
    let (state, app) = test_app(test_config());
    seed(&state);
    let token = valid_token(&state);

    let (status, body) = send(
        &app,
        get("/api/messages?user=&message=&page=&limit=", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert_eq!(body["pagination"]["page"], json!(1));
    assert_eq!(body["pagination"]["limit"], json!(10));
}

#[tokio::test]
async fn test_pagination_slices_filtered_matches() {
    let (state, app) = test_app(test_config());
    for n in 1..=25 {
        state.message_log.append("alice", format!("msg {n}")).unwrap();
    }
    let token = valid_token(&state);

    let (_, body) = send(&app, get("/api/messages?page=3&limit=10", Some(&token))).await;
    assert_eq!(ids(&body), (21..=25).collect::<Vec<_>>());
    assert_eq!(body["pagination"]["count"], json!(5));
    assert_eq!(body["pagination"]["total"], json!(25));
    assert_eq!(body["pagination"]["totalPages"], json!(3));
    assert_eq!(body["pagination"]["hasNextPage"], json!(false));
    assert_eq!(body["pagination"]["hasPreviousPage"], json!(true));

    let (_, body) = send(&app, get("/api/messages?page=2&limit=10", Some(&token))).await;
    assert_eq!(body["pagination"]["hasNextPage"], json!(true));
    assert_eq!(body["pagination"]["hasPreviousPage"], json!(true));
}

#[tokio::test]
async fn test_page_past_the_end_is_empty_not_an_error() {
    let (state, app) = test_app(test_config());
    for n in 1..=25 {
        state.message_log.append("alice", format!("msg {n}")).unwrap();
    }
    let token = valid_token(&state);

    let (status, body) = send(&app, get("/api/messages?page=5&limit=10", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), Vec::<u64>::new());
    assert_eq!(body["pagination"]["count"], json!(0));
    assert_eq!(body["pagination"]["total"], json!(25));
    assert_eq!(body["pagination"]["totalPages"], json!(3));
    assert_eq!(body["pagination"]["hasNextPage"], json!(false));
    assert_eq!(body["pagination"]["hasPreviousPage"], json!(true));
}

#[tokio::test]
async fn test_invalid_pagination_is_rejected() {
    let (state, app) = test_app(test_config());
    seed(&state);
    let token = valid_token(&state);

    for query in ["page=0", "limit=0", "limit=-5", "page=-1&limit=10", "page=abc", "limit=1.5"] {
        let (status, body) =
            send(&app, get(&format!("/api/messages?{query}"), Some(&token))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");
        assert_error(&body, "Page and limit must be greater than 0");
    }
}

#[tokio::test]
async fn test_query_requires_valid_token() {
    let (state, app) = test_app(test_config());
    seed(&state);

    let (status, body) = send(&app, get("/api/messages", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "Unauthorized - Missing token");

    let (status, body) = send(&app, get("/api/messages", Some("garbage"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "Unauthorized - Invalid or expired token");

    let expired = expired_token(&state);
    let (status, body) = send(&app, get("/api/messages", Some(&expired))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "Unauthorized - Invalid or expired token");
}

#[tokio::test]
async fn test_messages_added_over_rest_are_queryable() {
    let (state, app) = test_app(test_config());
    let token = valid_token(&state);

    send(
        &app,
        post_json("/api/add-message", r#"{"user":"carol","message":"first"}"#, Some(&token)),
    )
    .await;

    let (_, body) = send(&app, get("/api/messages?user=carol", Some(&token))).await;
    assert_eq!(body["data"][0]["message"], json!("first"));
    assert_eq!(body["data"][0]["id"], json!(1));
}
