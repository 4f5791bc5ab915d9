//! Middleware for the site
//!
//! Provides request logging with duration tracking, Prometheus request
//! metrics and the browser identity cookie.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{header, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

use crate::core::services::Services;
use crate::core::session::BrowserId;

/// Request logging middleware
///
/// Logs all incoming requests with method, URI, status code, and
/// duration. Client errors are logged at WARN, server errors at ERROR.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    // Process request
    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    } else if status.is_client_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}

/// Prometheus request metrics middleware
///
/// Counts requests by method, route template and status. Requests that
/// match no route share the `unmatched` path label so arbitrary URLs
/// cannot grow the label set.
pub async fn track_metrics(
    State(services): State<Arc<Services>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = Instant::now();

    let response = next.run(request).await;

    services.metrics.record_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

/// Browser identity middleware
///
/// Resolves the signed identity cookie into a [`BrowserId`] request
/// extension. A missing or tampered cookie gets a fresh identity,
/// issued with `Set-Cookie` on the response.
pub async fn browser_identity(
    State(services): State<Arc<Services>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let session = &services.config.session;

    let existing = read_cookie(request.headers(), &session.cookie_name)
        .and_then(|value| services.signer.verify(value));

    let (browser, issued) = match existing {
        Some(browser) => (browser, false),
        None => (BrowserId::generate(), true),
    };

    request.extensions_mut().insert(browser.clone());
    let mut response = next.run(request).await;

    if issued {
        let cookie = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            session.cookie_name,
            services.signer.sign(&browser),
            session.max_age_secs(),
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => error!(error = %e, "Failed to encode browser cookie"),
        }
    }

    response
}

/// Find a cookie value by name across all `Cookie` headers
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
