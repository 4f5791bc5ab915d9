// Integration tests for static mounts and the status check

use axum::http::StatusCode;
use docsite::core::config::Config;

use crate::common::{body_string, browser_cookie, create_test_app, create_test_app_with, get, TestAssets};

fn app_with_assets(assets: &TestAssets) -> axum::Router {
    let mut config = Config::default();
    config.site.assets_dir = assets.path().to_path_buf();
    create_test_app_with(config)
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = create_test_app();

    let response = get(&app, "/status", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(browser_cookie(&response).is_none());
    assert_eq!(body_string(response).await, "Ok");
}

#[tokio::test]
async fn test_static_directories() {
    let assets = TestAssets::new();
    let app = app_with_assets(&assets);

    for (uri, expected) in [
        ("/favicon/favicon.ico", "ico"),
        ("/fonts/fira.woff2", "font"),
        ("/static/style.css", "body { margin: 0; }"),
    ] {
        let response = get(&app, uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert_eq!(body_string(response).await, expected);
    }
}

#[tokio::test]
async fn test_logo_files() {
    let assets = TestAssets::new();
    let app = app_with_assets(&assets);

    let logo = get(&app, "/logo.png", None).await;
    assert_eq!(logo.status(), StatusCode::OK);
    assert_eq!(body_string(logo).await, "logo");

    let square = get(&app, "/logo_square.png", None).await;
    assert_eq!(square.status(), StatusCode::OK);
    assert_eq!(body_string(square).await, "square logo");
}

#[tokio::test]
async fn test_missing_static_file() {
    let assets = TestAssets::new();
    let app = app_with_assets(&assets);

    let response = get(&app, "/static/missing.js", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
