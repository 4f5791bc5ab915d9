//! Core domain logic (protocol-agnostic)
//!
//! This module contains all site logic that is independent
//! of the HTTP transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Documentation entries and search shapes
//! - **metrics**: Prometheus request and session metrics
//! - **registry**: Slug -> entry mapping, populated once
//! - **search**: BM25 search over the registry
//! - **render**: HTML page rendering
//! - **session**: Per-browser storage and cookie signing
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod metrics;
pub mod registry;
pub mod render;
pub mod search;
pub mod services;
pub mod session;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SiteError};
pub use services::Services;
