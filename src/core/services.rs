//! Unified service container for the documentation site
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::metrics::SiteMetrics;
use crate::core::registry::Registry;
use crate::core::render::PageRenderer;
use crate::core::search::SearchService;
use crate::core::session::{CookieSigner, MemorySessionStore, SessionStore};
use std::sync::Arc;

/// Unified services container
///
/// Handlers receive this as shared state. Everything except the
/// session store is read-only once [`Services::start`] returns.
#[derive(Clone)]
pub struct Services {
    /// Documentation registry
    pub registry: Arc<Registry>,

    /// Search service for BM25 queries
    pub search: Arc<SearchService>,

    /// HTML page renderer
    pub renderer: Arc<PageRenderer>,

    /// Per-browser key/value storage
    pub sessions: Arc<dyn SessionStore>,

    /// Prometheus request and session metrics
    pub metrics: Arc<SiteMetrics>,

    /// Browser identity cookie signer
    pub signer: CookieSigner,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Wire services around an already populated registry.
    ///
    /// The search index is not built; use [`Services::start`] for the
    /// full startup sequence.
    pub fn new(config: Config, registry: Registry) -> Result<Self> {
        let registry = Arc::new(registry);

        let search = Arc::new(SearchService::new(
            Arc::clone(&registry),
            config.search.default_k,
            config.search.max_k,
            config.search.max_query_length,
        ));

        let renderer = Arc::new(PageRenderer::new(
            Arc::clone(&registry),
            config.site.title.clone(),
        )?);

        Ok(Self {
            registry,
            search,
            renderer,
            sessions: Arc::new(MemorySessionStore::from_config(&config.session)),
            metrics: Arc::new(SiteMetrics::new()?),
            signer: CookieSigner::new(&config.session.secret_key),
            config: Arc::new(config),
        })
    }

    /// Startup sequence: populate the registry, wire services, then
    /// build the search index. Any failure aborts startup.
    pub fn start(config: Config) -> Result<Self> {
        let registry = match &config.site.content_dir {
            Some(dir) => Registry::from_content_dir(dir)?,
            None => Registry::builtin()?,
        };
        tracing::info!(entries = registry.len(), "Documentation registry populated");

        let services = Self::new(config, registry)?;
        services.search.build_search_index()?;

        Ok(services)
    }
}
