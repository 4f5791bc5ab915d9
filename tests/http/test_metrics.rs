// Integration tests for the Prometheus metrics endpoint

use axum::http::{header, StatusCode};
use docsite::http;

use crate::common::{
    body_string, browser_cookie, create_test_app, create_test_services, get, post_json,
    request_count,
};

#[tokio::test]
async fn test_metrics_endpoint_format() {
    let app = create_test_app();

    let response = get(&app, "/metrics", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(browser_cookie(&response).is_none());
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    let body = body_string(response).await;
    assert!(body.contains("docsite_browser_sessions"));
    assert!(body.contains("docsite_search_documents 8"));
}

#[tokio::test]
async fn test_page_request_raises_counter() {
    let app = create_test_app();
    let before = body_string(get(&app, "/metrics", None).await).await;
    assert_eq!(request_count(&before, "GET", "/documentation/:name", 200), 0);

    get(&app, "/documentation/section_controls", None).await;
    get(&app, "/documentation/section_binding_properties", None).await;

    let after = body_string(get(&app, "/metrics", None).await).await;
    assert_eq!(request_count(&after, "GET", "/documentation/:name", 200), 2);
}

#[tokio::test]
async fn test_counter_labels_status() {
    let app = create_test_app();

    get(&app, "/documentation/nonexistent-slug", None).await;
    get(&app, "/api/search?q=%20", None).await;

    let text = body_string(get(&app, "/metrics", None).await).await;
    assert_eq!(request_count(&text, "GET", "/documentation/:name", 404), 1);
    assert_eq!(request_count(&text, "GET", "/api/search", 400), 1);
}

#[tokio::test]
async fn test_unrouted_paths_share_one_label() {
    let app = create_test_app();

    get(&app, "/no/such/page", None).await;
    get(&app, "/another-missing-page", None).await;

    let text = body_string(get(&app, "/metrics", None).await).await;
    assert_eq!(request_count(&text, "GET", "unmatched", 404), 2);
    assert!(!text.contains("another-missing-page"));
}

#[tokio::test]
async fn test_browser_sessions_gauge() {
    let services = create_test_services();
    let app = http::router(services);

    post_json(&app, "/dark_mode", r#"{"value": true}"#, None).await;
    post_json(&app, "/dark_mode", r#"{"value": false}"#, None).await;

    let text = body_string(get(&app, "/metrics", None).await).await;
    assert!(text.contains("docsite_browser_sessions 2"));
}
