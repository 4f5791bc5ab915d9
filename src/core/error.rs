//! Error types and error handling for the documentation site.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping lives in the `http` adapter.

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Main error type for the documentation site
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Duplicate documentation slug: {0:?}")]
    DuplicateSlug(String),

    #[error("Registry has no index entry (empty slug)")]
    MissingIndexEntry,

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Search index has not been built")]
    SearchIndexNotBuilt,

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Metrics error: {0}")]
    MetricsError(#[from] prometheus::Error),
}

impl From<tera::Error> for SiteError {
    fn from(err: tera::Error) -> Self {
        // tera keeps the useful part of the message in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        SiteError::RenderError(message)
    }
}

impl SiteError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::PageNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, SiteError::InvalidQuery(_))
    }

    /// Check if this error is unavailable-until-startup-completes
    pub fn is_unavailable(&self) -> bool {
        matches!(self, SiteError::SearchIndexNotBuilt)
    }
}
