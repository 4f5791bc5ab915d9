//! Prometheus metrics for the site.
//!
//! Each [`SiteMetrics`] owns its own registry, so separately started
//! services never share counters.

use crate::core::error::Result;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

const NAMESPACE: &str = "docsite";

/// Request and session metrics, exported in the Prometheus text format
pub struct SiteMetrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_request_duration: HistogramVec,
    browser_sessions: IntGauge,
    search_documents: IntGauge,
}

impl std::fmt::Debug for SiteMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteMetrics").finish_non_exhaustive()
    }
}

impl SiteMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        // Labels: method, path (route template), status
        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests").namespace(NAMESPACE),
            &["method", "path", "status"],
        )?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .namespace(NAMESPACE)
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "path"],
        )?;

        let browser_sessions = IntGauge::with_opts(
            Opts::new(
                "browser_sessions",
                "Browsers with stored preferences, sampled at scrape time",
            )
            .namespace(NAMESPACE),
        )?;

        let search_documents = IntGauge::with_opts(
            Opts::new("search_documents", "Documents in the published search index")
                .namespace(NAMESPACE),
        )?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(http_request_duration.clone()))?;
        registry.register(Box::new(browser_sessions.clone()))?;
        registry.register(Box::new(search_documents.clone()))?;

        Ok(Self {
            registry,
            http_requests,
            http_request_duration,
            browser_sessions,
            search_documents,
        })
    }

    /// Count one finished request
    pub fn record_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        self.http_requests
            .with_label_values(&[method, path, &status.to_string()])
            .inc();
        self.http_request_duration
            .with_label_values(&[method, path])
            .observe(duration_secs);
    }

    pub fn set_browser_sessions(&self, count: u64) {
        self.browser_sessions
            .set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    pub fn set_search_documents(&self, count: usize) {
        self.search_documents
            .set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    /// Encode every registered metric in the text exposition format
    pub fn gather(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Content type of [`gather`](Self::gather) output
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}
