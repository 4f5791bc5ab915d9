// Integration tests for the dark mode preference endpoint

use axum::http::StatusCode;
use docsite::core::config::Config;
use docsite::core::session::{BrowserId, DARK_MODE_KEY};
use docsite::http;
use serde_json::{json, Value};

use crate::common::{
    body_string, browser_cookie, create_test_services, create_test_services_with, get, post_json,
};

/// Recover the browser id behind a `browser_id=...` cookie pair
fn browser_id(services: &docsite::Services, cookie: &str) -> BrowserId {
    let value = cookie.trim_start_matches("browser_id=");
    services.signer.verify(value).expect("cookie should verify")
}

#[tokio::test]
async fn test_dark_mode_true_is_stored() {
    let services = create_test_services();
    let app = http::router(services.clone());
    let cookie = browser_cookie(&get(&app, "/", None).await).unwrap();

    let response = post_json(&app, "/dark_mode", r#"{"value": true}"#, Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.is_empty());

    let browser = browser_id(&services, &cookie);
    assert_eq!(
        services.sessions.get(&browser, DARK_MODE_KEY).await,
        Some(json!(true))
    );

    // subsequent pages render dark for this browser
    let html = body_string(get(&app, "/documentation", Some(&cookie)).await).await;
    assert!(html.contains("<body class=\"dark\">"));
}

#[tokio::test]
async fn test_dark_mode_missing_value_stores_null() {
    let services = create_test_services();
    let app = http::router(services.clone());
    let cookie = browser_cookie(&get(&app, "/", None).await).unwrap();
    post_json(&app, "/dark_mode", r#"{"value": true}"#, Some(&cookie)).await;

    let response = post_json(&app, "/dark_mode", "{}", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let browser = browser_id(&services, &cookie);
    assert_eq!(
        services.sessions.get(&browser, DARK_MODE_KEY).await,
        Some(Value::Null)
    );

    let html = body_string(get(&app, "/", Some(&cookie)).await).await;
    assert!(html.contains("<body class=\"auto\">"));
}

#[tokio::test]
async fn test_dark_mode_malformed_body_is_noop() {
    let services = create_test_services();
    let app = http::router(services.clone());
    let cookie = browser_cookie(&get(&app, "/", None).await).unwrap();
    post_json(&app, "/dark_mode", r#"{"value": false}"#, Some(&cookie)).await;

    let response = post_json(&app, "/dark_mode", "{value: tru", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let browser = browser_id(&services, &cookie);
    assert_eq!(
        services.sessions.get(&browser, DARK_MODE_KEY).await,
        Some(json!(false))
    );
}

#[tokio::test]
async fn test_dark_mode_isolated_between_browsers() {
    let services = create_test_services();
    let app = http::router(services.clone());
    let first = browser_cookie(&get(&app, "/", None).await).unwrap();
    let second = browser_cookie(&get(&app, "/", None).await).unwrap();
    assert_ne!(first, second);

    post_json(&app, "/dark_mode", r#"{"value": true}"#, Some(&first)).await;

    let first_html = body_string(get(&app, "/", Some(&first)).await).await;
    let second_html = body_string(get(&app, "/", Some(&second)).await).await;
    assert!(first_html.contains("<body class=\"dark\">"));
    assert!(second_html.contains("<body class=\"auto\">"));

    let browser = browser_id(&services, &second);
    assert_eq!(services.sessions.get(&browser, DARK_MODE_KEY).await, None);
}

#[tokio::test]
async fn test_dark_mode_without_cookie_issues_one() {
    let services = create_test_services();
    let app = http::router(services.clone());

    let response = post_json(&app, "/dark_mode", r#"{"value": false}"#, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = browser_cookie(&response).expect("Expected browser cookie");
    let browser = browser_id(&services, &cookie);
    assert_eq!(
        services.sessions.get(&browser, DARK_MODE_KEY).await,
        Some(json!(false))
    );
}

#[tokio::test]
async fn test_cookieless_posts_stay_bounded() {
    let mut config = Config::default();
    config.session.max_browsers = 10;
    let services = create_test_services_with(config);
    let app = http::router(services.clone());

    for _ in 0..100 {
        let response = post_json(&app, "/dark_mode", r#"{"value": true}"#, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert!(services.sessions.browser_count().await <= 10);
}
