//! Integration tests for the greeting/health endpoints and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get, memory_store};
use folio_db::StoreHandle;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: greetings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_greeting() {
    let response = get(build_test_app(StoreHandle::Unconfigured), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Hello from FastAPI Backend!");
}

#[tokio::test]
async fn api_hello_returns_greeting() {
    let response = get(build_test_app(StoreHandle::Unconfigured), "/api/hello").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Hello from the backend API!");
}

// ---------------------------------------------------------------------------
// Test: GET /health reflects the store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_is_ok_with_store() {
    let response = get(build_test_app(memory_store()), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db"], "Connected & Working");
}

#[tokio::test]
async fn health_check_is_degraded_without_store() {
    let response = get(build_test_app(StoreHandle::Unconfigured), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db"], "Not Available");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(memory_store()), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_test_app(memory_store()), "/").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight mirrors any origin and allows credentials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_mirrors_origin() {
    let app = build_test_app(memory_store());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header("Origin", "https://portfolio.example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,x-custom")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let header = |name: &str| {
        headers
            .get(name)
            .unwrap_or_else(|| panic!("Missing {name} header"))
            .to_str()
            .unwrap()
            .to_string()
    };

    assert_eq!(
        header("access-control-allow-origin"),
        "https://portfolio.example.com"
    );
    assert_eq!(header("access-control-allow-credentials"), "true");
    assert!(header("access-control-allow-methods").contains("POST"));
    assert!(header("access-control-allow-headers").contains("x-custom"));
}
