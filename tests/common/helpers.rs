// Test helper functions

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use docsite::core::config::Config;
use docsite::core::services::Services;
use docsite::http;
use tower::ServiceExt as TowerServiceExt;

/// Start services with the built-in documentation
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> Arc<Services> {
    Arc::new(Services::start(Config::default()).expect("Failed to start services"))
}

/// Start services with custom configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services_with(config: Config) -> Arc<Services> {
    Arc::new(Services::start(config).expect("Failed to start services"))
}

/// Router over the built-in documentation
#[allow(dead_code)] // Used in integration tests
pub fn create_test_app() -> Router {
    http::router(create_test_services())
}

/// Router over custom configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_app_with(config: Config) -> Router {
    http::router(create_test_services_with(config))
}

/// Send a GET request, optionally with a cookie
#[allow(dead_code)] // Used in integration tests
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a POST request with a raw JSON body, optionally with a cookie
#[allow(dead_code)] // Used in integration tests
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Read the whole response body as UTF-8
#[allow(dead_code)] // Used in integration tests
pub async fn body_string(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// The `name=value` pair of the browser identity cookie, if one was issued
#[allow(dead_code)] // Used in integration tests
pub fn browser_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("browser_id="))
        .and_then(|value| value.split(';').next())
        .map(|pair| pair.to_string())
}

/// Current value of `docsite_http_requests_total` for one label set
#[allow(dead_code)] // Used in integration tests
pub fn request_count(metrics_text: &str, method: &str, path: &str, status: u16) -> u64 {
    let labels = [
        format!("method=\"{method}\""),
        format!("path=\"{path}\""),
        format!("status=\"{status}\""),
    ];
    metrics_text
        .lines()
        .filter(|line| line.starts_with("docsite_http_requests_total{"))
        .find(|line| labels.iter().all(|label| line.contains(label.as_str())))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
