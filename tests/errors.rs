//! Integration tests for the 404 and 500 error envelopes.

mod common;

use axum::{routing::get as get_route, Json};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, body_text, build_test_app, get, send, test_config};
use serde_json::json;
use std::sync::Arc;
use ufdr_copilot::models::{ApiError, ApiResponse, ApiResult};
use ufdr_copilot::routes::{create_router, with_middleware};

const SECRET: &str = "open /var/lib/ufdr/cases/4411.ufdr: permission denied";

async fn panicking_handler() -> &'static str {
    panic!("{}", SECRET)
}

async fn failing_handler() -> ApiResult<ApiResponse> {
    Err(ApiError::Internal(SECRET.to_string()))
}

async fn non_object_handler() -> ApiResult<ApiResponse> {
    Ok(Json(ApiResponse::success(&"just a string", "never sent")?))
}

fn app_with_faulty_routes() -> axum::Router {
    let config = Arc::new(test_config(&[]));
    let router = create_router()
        .route("/boom", get_route(panicking_handler))
        .route("/fail", get_route(failing_handler))
        .route("/bad-data", get_route(non_object_handler))
        .with_state(config.clone());
    with_middleware(router, &config).unwrap()
}

#[tokio::test]
async fn unknown_path_returns_envelope_404() {
    let response = get(build_test_app(), "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "message": "Endpoint not found"})
    );
}

#[tokio::test]
async fn unknown_path_under_api_returns_envelope_404() {
    let response = get(build_test_app(), "/api/v2/status").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "message": "Endpoint not found"})
    );
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_envelope_404() {
    for (method, uri) in [
        (Method::POST, "/health"),
        (Method::DELETE, "/api/v1/status"),
        (Method::PUT, "/"),
    ] {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = send(build_test_app(), request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": "Endpoint not found"})
        );
    }
}

#[tokio::test]
async fn panic_becomes_internal_error_without_detail() {
    let response = get(app_with_faulty_routes(), "/boom").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert!(!body.contains("ufdr/cases"), "fault detail leaked: {body}");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        json!({"success": false, "message": "Internal server error"})
    );
}

#[tokio::test]
async fn internal_error_hides_detail() {
    let response = get(app_with_faulty_routes(), "/fail").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert!(!body.contains("permission denied"), "fault detail leaked: {body}");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&body).unwrap(),
        json!({"success": false, "message": "Internal server error"})
    );
}

#[tokio::test]
async fn non_object_data_is_an_internal_error() {
    let response = get(app_with_faulty_routes(), "/bad-data").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "message": "Internal server error"})
    );
}

#[tokio::test]
async fn faulty_routes_do_not_affect_healthy_ones() {
    let response = get(app_with_faulty_routes(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}
