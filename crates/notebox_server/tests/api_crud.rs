use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use notebox_core::db::open_db_in_memory;
use notebox_core::NOTE_TEXT_MAX_CHARS;
use notebox_server::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let conn = open_db_in_memory().unwrap();
    router(AppState::new(conn))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

#[tokio::test]
async fn home_returns_welcome_text() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Value::String("<h2>Welcome to the Notes server</h2>".to_string())
    );
}

#[tokio::test]
async fn full_note_lifecycle_matches_contract() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/notes",
        Some(json!({"text": "buy milk"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "text": "buy milk"}));

    let (status, body) = send(&app, Method::GET, "/notes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "text": "buy milk"}));

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/notes/1",
        Some(json!({"text": "buy eggs"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "text": "buy eggs"}));

    let (status, body) = send(&app, Method::DELETE, "/notes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Note deleted"}));

    let (status, body) = send(&app, Method::GET, "/notes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Note not found"}));
}

#[tokio::test]
async fn list_returns_notes_in_insertion_order() {
    let app = test_app();

    for text in ["a", "b", "c"] {
        let (status, _) = send(&app, Method::POST, "/notes", Some(json!({ "text": text }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "text": "a"},
            {"id": 2, "text": "b"},
            {"id": 3, "text": "c"},
        ])
    );
}

#[tokio::test]
async fn list_is_empty_array_on_fresh_store() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/notes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn put_replaces_text_of_existing_note() {
    let app = test_app();

    send(&app, Method::POST, "/notes", Some(json!({"text": "draft"}))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/notes/1",
        Some(json!({"text": "final"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "text": "final"}));
}

#[tokio::test]
async fn missing_id_yields_not_found_for_every_id_route() {
    let app = test_app();

    let not_found = json!({"error": "Note not found"});

    let (status, body) = send(&app, Method::GET, "/notes/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/notes/99",
        Some(json!({"text": "ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);

    let (status, body) = send(&app, Method::PATCH, "/notes/99", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);

    let (status, body) = send(&app, Method::DELETE, "/notes/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found);
}

#[tokio::test]
async fn patch_without_text_field_leaves_note_unchanged() {
    let app = test_app();

    send(&app, Method::POST, "/notes", Some(json!({"text": "keep"}))).await;

    let (status, body) = send(&app, Method::PATCH, "/notes/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "text": "keep"}));
}

#[tokio::test]
async fn over_long_text_is_rejected_with_bad_request() {
    let app = test_app();

    let too_long = "x".repeat(NOTE_TEXT_MAX_CHARS + 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/notes",
        Some(json!({ "text": too_long })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("maximum"));

    send(&app, Method::POST, "/notes", Some(json!({"text": "ok"}))).await;
    let (status, _) = send(
        &app,
        Method::PUT,
        "/notes/1",
        Some(json!({ "text": "y".repeat(NOTE_TEXT_MAX_CHARS + 1) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_without_text_field_is_rejected_by_extractor() {
    let app = test_app();

    let (status, _) = send(&app, Method::POST, "/notes", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
