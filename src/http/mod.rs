//! HTTP adapter
//!
//! Depends only on core/.
//!
//! Provides the page routes, the search API, the Prometheus metrics
//! endpoint and the static asset mounts via the Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::core::services::Services;

/// Build the site router
///
/// Page routes and the dark mode endpoint run behind the browser
/// identity middleware; the liveness check, search API, metrics and
/// static assets do not. Every request is logged and counted.
pub fn router(services: Arc<Services>) -> Router {
    let site = services.config.site.clone();

    let pages = Router::new()
        .route("/", get(main_page_handler))
        .route("/documentation", get(documentation_index_handler))
        .route("/documentation/:name", get(documentation_page_handler))
        .route("/dark_mode", post(dark_mode_handler))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&services),
            middleware::browser_identity,
        ));

    let api = Router::new()
        .route("/status", get(status_handler))
        .route("/api/search", get(search_handler))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(pages)
        .merge(api)
        // Read-only static assets
        .nest_service("/favicon", ServeDir::new(site.favicon_dir()))
        .nest_service("/fonts", ServeDir::new(site.fonts_dir()))
        .nest_service("/static", ServeDir::new(site.static_dir()))
        .route_service("/logo.png", ServeFile::new(site.logo_path()))
        .route_service("/logo_square.png", ServeFile::new(site.logo_square_path()))
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&services),
            middleware::track_metrics,
        ))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .with_state(services)
}
