#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ufdr_copilot::config::Config;
use ufdr_copilot::routes::create_app;

/// Configuration built from explicit variables instead of the process
/// environment, so tests can run in parallel.
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    Config::from_vars(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .expect("test config must parse")
}

/// The production router and middleware stack with default configuration.
pub fn build_test_app() -> Router {
    create_app(test_config(&[])).expect("default config must build")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
