//! HTTP request handlers for the site
//!
//! Implements the page routes, the liveness check, the dark mode
//! preference endpoint and the search API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension, Json,
};
use serde_json::Value;

use crate::core::error::SiteError;
use crate::core::render::{DarkMode, PageContext};
use crate::core::services::Services;
use crate::core::session::{BrowserId, DARK_MODE_KEY};
use crate::core::types::{SearchParams, SearchResponse};

/// Build the rendering context for this browser
async fn page_context(services: &Services, browser: &BrowserId) -> PageContext {
    let stored = services.sessions.get(browser, DARK_MODE_KEY).await;
    PageContext {
        dark_mode: DarkMode::from_session_value(stored.as_ref()),
    }
}

/// Landing page handler (`GET /`)
pub async fn main_page_handler(
    State(services): State<Arc<Services>>,
    Extension(browser): Extension<BrowserId>,
) -> Result<Html<String>, SiteError> {
    let ctx = page_context(&services, &browser).await;
    Ok(Html(services.renderer.render_main_page(&ctx)?))
}

/// Documentation index handler (`GET /documentation`)
///
/// Renders the index entry without the navigation menu.
pub async fn documentation_index_handler(
    State(services): State<Arc<Services>>,
    Extension(browser): Extension<BrowserId>,
) -> Result<Html<String>, SiteError> {
    let ctx = page_context(&services, &browser).await;
    let entry = services.registry.index_entry();
    Ok(Html(services.renderer.render_page(entry, false, &ctx)?))
}

/// Documentation detail handler (`GET /documentation/:name`)
///
/// Renders the entry with the navigation menu. Unknown slugs get the
/// not-found page with a 404 status.
pub async fn documentation_page_handler(
    State(services): State<Arc<Services>>,
    Extension(browser): Extension<BrowserId>,
    Path(name): Path<String>,
) -> Response {
    let ctx = page_context(&services, &browser).await;

    let rendered = match services.registry.get(&name) {
        Ok(entry) => services
            .renderer
            .render_page(entry, true, &ctx)
            .map(|html| (StatusCode::OK, Html(html))),
        Err(err) if err.is_not_found() => services
            .renderer
            .render_not_found(&name, &ctx)
            .map(|html| (StatusCode::NOT_FOUND, Html(html))),
        Err(err) => Err(err),
    };

    match rendered {
        Ok(page) => page.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Liveness check handler (`GET /status`)
///
/// Always returns the literal `Ok`.
pub async fn status_handler() -> &'static str {
    "Ok"
}

/// Prometheus scrape handler (`GET /metrics`)
pub async fn metrics_handler(
    State(services): State<Arc<Services>>,
) -> Result<Response, SiteError> {
    services
        .metrics
        .set_browser_sessions(services.sessions.browser_count().await);
    services
        .metrics
        .set_search_documents(services.search.document_count().unwrap_or(0));
    let body = services.metrics.gather()?;

    Ok(([(header::CONTENT_TYPE, services.metrics.content_type())], body).into_response())
}

/// Dark mode preference handler (`POST /dark_mode`)
///
/// Stores the JSON body's `value` under `dark_mode` for this browser.
/// An object without `value` stores `null`. A body that is not a JSON
/// object is ignored.
pub async fn dark_mode_handler(
    State(services): State<Arc<Services>>,
    Extension(browser): Extension<BrowserId>,
    body: Bytes,
) -> StatusCode {
    let value = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(mut fields)) => fields.remove("value").unwrap_or(Value::Null),
        Ok(other) => {
            tracing::debug!(browser = %browser, body = %other, "Ignoring non-object dark mode body");
            return StatusCode::OK;
        }
        Err(e) => {
            tracing::debug!(browser = %browser, error = %e, "Ignoring malformed dark mode body");
            return StatusCode::OK;
        }
    };

    services.sessions.set(&browser, DARK_MODE_KEY, value).await;
    StatusCode::OK
}

/// Search handler (`GET /api/search?q=...&k=...`)
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, SiteError> {
    let response = services.search.search(&params.q, params.k)?;
    Ok(Json(response))
}
