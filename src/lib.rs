//! Docsite - documentation website server
//!
//! Serves the landing page, the documentation pages and a search
//! API for a UI framework's website.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Site logic (protocol-agnostic)
//!   - config, error, types
//!   - registry (documentation entries keyed by slug)
//!   - search (Tantivy index built once at startup)
//!   - render (Tera templates)
//!   - session (per-browser storage, signed cookies)
//!   - metrics (Prometheus registry)
//!   - services (unified service container)
//!
//! - **http**: Axum adapter (depends on core)
//!   - router, handlers, middleware, error responses

// Core site logic (protocol-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, SiteError};
pub use crate::core::registry::Registry;
pub use crate::core::services::Services;
pub use crate::core::types::*;
