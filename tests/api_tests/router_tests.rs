//! Tests for the HTTP router
//!
//! These tests verify:
//! - Health, metrics and reset endpoints
//! - Hit counting on the app file server only
//! - Chirp validation, creation and listing
//! - Error bodies and CORS headers

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chirpy::api::{build_router, AppState};
use chirpy::config::Config;
use chirpy::database::Chirp;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_app() -> (TempDir, AppState, Router) {
    let temp_dir = TempDir::new().unwrap();
    let app_dir = temp_dir.path().join("app");
    let assets_dir = temp_dir.path().join("assets");
    fs::create_dir_all(&app_dir).unwrap();
    fs::create_dir_all(&assets_dir).unwrap();
    fs::write(app_dir.join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();
    fs::write(assets_dir.join("logo.txt"), "logo").unwrap();

    let config = Config::builder()
        .db_path(temp_dir.path().join("database.json"))
        .app_dir(&app_dir)
        .assets_dir(&assets_dir)
        .build();
    let state = AppState::from_config(&config).unwrap();
    let router = build_router(state.clone(), &config);
    (temp_dir, state, router)
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

async fn get(router: &Router, uri: &str) -> Response {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(router: &Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

// =============================================================================
// Health / Metrics Tests
// =============================================================================

#[tokio::test]
async fn test_healthz() {
    let (_temp, _state, router) = setup_app();

    let response = get(&router, "/api/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_app_requests_are_counted() {
    let (_temp, state, router) = setup_app();

    for _ in 0..3 {
        let response = get(&router, "/app/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Welcome to Chirpy"));
    }

    assert_eq!(state.hits.hits(), 3);

    let response = get(&router, "/admin/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let page = body_string(response).await;
    assert!(page.contains("Welcome, Chirpy Admin"));
    assert!(page.contains("Chirpy has been visited 3 times!"));
}

#[tokio::test]
async fn test_other_routes_are_not_counted() {
    let (_temp, state, router) = setup_app();

    get(&router, "/api/healthz").await;
    get(&router, "/admin/metrics").await;
    let response = get(&router, "/assets/logo.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "logo");

    assert_eq!(state.hits.hits(), 0);
}

#[tokio::test]
async fn test_reset() {
    let (_temp, state, router) = setup_app();

    get(&router, "/app/").await;
    get(&router, "/app/").await;
    assert_eq!(state.hits.hits(), 2);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/reset")
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.hits.hits(), 0);
}

// =============================================================================
// Validate Tests
// =============================================================================

#[tokio::test]
async fn test_validate_chirp_cleans_body() {
    let (_temp, _state, router) = setup_app();

    let response = post_json(
        &router,
        "/api/validate_chirp",
        json!({ "body": "I had something interesting for breakfast Fornax" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "valid": true,
            "cleaned_body": "I had something interesting for breakfast ****"
        })
    );
}

#[tokio::test]
async fn test_validate_chirp_too_long() {
    let (_temp, _state, router) = setup_app();

    let response = post_json(
        &router,
        "/api/validate_chirp",
        json!({ "body": "x".repeat(141) }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Chirp is too long" }));
}

// =============================================================================
// Chirp Tests
// =============================================================================

#[tokio::test]
async fn test_create_chirp() {
    let (_temp, state, router) = setup_app();

    let response = post_json(&router, "/api/chirps", json!({ "body": "first kerfuffle" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "Id": 1, "body": "first ****" })
    );
    assert_eq!(state.db.list_chirps().unwrap(), vec![Chirp::new(1, "first ****")]);
}

#[tokio::test]
async fn test_create_chirp_too_long_is_not_stored() {
    let (_temp, state, router) = setup_app();

    let response = post_json(&router, "/api/chirps", json!({ "body": "x".repeat(141) })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(state.db.list_chirps().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_chirp_rejects_malformed_json() {
    let (_temp, _state, router) = setup_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/chirps")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = send(&router, request).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_list_chirps() {
    let (_temp, _state, router) = setup_app();

    let response = get(&router, "/api/chirps").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    post_json(&router, "/api/chirps", json!({ "body": "first" })).await;
    post_json(&router, "/api/chirps", json!({ "body": "second" })).await;

    let response = get(&router, "/api/chirps").await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut chirps: Vec<Chirp> = serde_json::from_value(body_json(response).await).unwrap();
    chirps.sort_by_key(|chirp| chirp.id);
    assert_eq!(chirps, vec![Chirp::new(1, "first"), Chirp::new(2, "second")]);
}

#[tokio::test]
async fn test_list_chirps_corrupt_database() {
    let (_temp, state, router) = setup_app();
    fs::write(state.db.path(), b"corrupt").unwrap();

    let response = get(&router, "/api/chirps").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Database load failed"));
}

#[tokio::test]
async fn test_concurrent_creates_over_http() {
    let (_temp, state, router) = setup_app();

    let mut handles = vec![];
    for i in 0..16 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            let response =
                post_json(&router, "/api/chirps", json!({ "body": format!("chirp {}", i) })).await;
            assert_eq!(response.status(), StatusCode::CREATED);
            body_json(response).await["Id"].as_u64().unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
    assert_eq!(state.db.list_chirps().unwrap().len(), 16);
}

// =============================================================================
// CORS Tests
// =============================================================================

#[tokio::test]
async fn test_cors_headers() {
    let (_temp, _state, router) = setup_app();

    let request = Request::builder()
        .uri("/api/healthz")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (_temp, _state, router) = setup_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/chirps")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
