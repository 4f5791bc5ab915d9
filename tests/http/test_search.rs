// Integration tests for the search API

use axum::http::StatusCode;
use docsite::core::config::Config;
use docsite::SearchResponse;

use crate::common::{body_string, create_test_app, create_test_app_with, get, TestContent};

#[tokio::test]
async fn test_search_endpoint() {
    let app = create_test_app();

    let response = get(&app, "/api/search?q=slider", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let search: SearchResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(search.query, "slider");
    assert!(!search.results.is_empty());
    assert_eq!(search.results[0].slug, "section_controls");
    assert_eq!(search.results[0].url, "/documentation/section_controls");
}

#[tokio::test]
async fn test_search_endpoint_k_limit() {
    let app = create_test_app();

    let response = get(&app, "/api/search?q=ui&k=2", None).await;

    let search: SearchResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(search.count <= 2);
}

#[tokio::test]
async fn test_search_endpoint_empty_query() {
    let app = create_test_app();

    let response = get(&app, "/api/search?q=%20", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_search_endpoint_missing_query_param() {
    let app = create_test_app();

    let response = get(&app, "/api/search", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_content_dir_keywords() {
    let content = TestContent::sample();
    let mut config = Config::default();
    config.site.content_dir = Some(content.path().to_path_buf());
    let app = create_test_app_with(config);

    let response = get(&app, "/api/search?q=press", None).await;

    let search: SearchResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(search.results[0].slug, "button");
}
