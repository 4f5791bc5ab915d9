//! BM25 documentation search using Tantivy.
//!
//! The [`SearchService`] owns the currently published index. A build
//! produces a complete new index and swaps it in only after commit, so
//! queries see either no index or a whole one.

use crate::core::error::{Result, SiteError};
use crate::core::registry::Registry;
use crate::core::search::index::BuiltIndex;
use crate::core::search::query::{preprocess_query, validate_query};
use crate::core::types::{SearchHit, SearchIndexStats, SearchResponse};
use chrono::Utc;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tantivy::{
    collector::TopDocs,
    query::QueryParser,
    schema::{Field, Value},
    TantivyDocument,
};

const TITLE_BOOST: f32 = 3.0;
const KEYWORDS_BOOST: f32 = 2.0;

/// BM25 search service
pub struct SearchService {
    registry: Arc<Registry>,
    current: RwLock<Option<Arc<BuiltIndex>>>,
    default_k: usize,
    max_k: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a search service. No index exists until
    /// [`build_search_index`](Self::build_search_index) is called.
    pub fn new(
        registry: Arc<Registry>,
        default_k: usize,
        max_k: usize,
        max_query_length: usize,
    ) -> Self {
        Self {
            registry,
            current: RwLock::new(None),
            default_k,
            max_k,
            max_query_length,
        }
    }

    /// Rebuild the search index from the registry.
    ///
    /// Must run after the registry is populated and before queries are
    /// served. Calling it again replaces the index with an equivalent one.
    pub fn build_search_index(&self) -> Result<SearchIndexStats> {
        let start = Instant::now();

        let built = BuiltIndex::build(&self.registry)?;
        let documents = built.documents();

        {
            let mut current = self
                .current
                .write()
                .map_err(|_| SiteError::SearchFailed("Search index lock poisoned".to_string()))?;
            *current = Some(Arc::new(built));
        }

        let stats = SearchIndexStats {
            documents,
            built_at: Utc::now(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            documents = stats.documents,
            duration_ms = stats.duration_ms,
            "Search index built"
        );

        Ok(stats)
    }

    /// Number of documents in the published index
    pub fn document_count(&self) -> Result<usize> {
        Ok(self.snapshot()?.documents())
    }

    /// Execute a search query
    pub fn search(&self, query_str: &str, k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();

        validate_query(query_str, self.max_query_length)?;

        let built = self.snapshot()?;

        // Determine k (result limit)
        let k_limit = k.unwrap_or(self.default_k).min(self.max_k).max(1);

        let searcher = built.reader().searcher();
        let fields = built.fields();

        let mut query_parser = QueryParser::for_index(
            built.index(),
            vec![fields.title, fields.summary, fields.keywords, fields.content],
        );
        query_parser.set_field_boost(fields.title, TITLE_BOOST);
        query_parser.set_field_boost(fields.keywords, KEYWORDS_BOOST);

        let processed = preprocess_query(query_str);
        let query = match query_parser.parse_query(&processed) {
            Ok(query) => query,
            Err(e) => {
                // Salvage whatever terms parse rather than rejecting visitor input
                tracing::debug!(query = %processed, error = %e, "Falling back to lenient parse");
                let (query, _errors) = query_parser.parse_query_lenient(&processed);
                query
            }
        };

        // Execute search with BM25 ranking
        let top_docs = searcher
            .search(&query, &TopDocs::with_limit(k_limit))
            .map_err(|e| SiteError::SearchFailed(format!("Search failed: {e}")))?;

        let mut results = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address).map_err(|e| {
                SiteError::SearchFailed(format!("Failed to retrieve document: {e}"))
            })?;

            let slug = Self::extract_text(&doc, fields.slug);
            let url = match self.registry.get(&slug) {
                Ok(entry) => entry.url(),
                Err(_) => continue,
            };

            results.push(SearchHit {
                score,
                title: Self::extract_text(&doc, fields.title),
                summary: Self::extract_text(&doc, fields.summary),
                slug,
                url,
            });
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(query = %query_str, count, duration_ms, "Search executed");

        Ok(SearchResponse {
            query: query_str.to_string(),
            results,
            count,
            duration_ms,
        })
    }

    fn snapshot(&self) -> Result<Arc<BuiltIndex>> {
        let current = self
            .current
            .read()
            .map_err(|_| SiteError::SearchFailed("Search index lock poisoned".to_string()))?;
        current.clone().ok_or(SiteError::SearchIndexNotBuilt)
    }

    /// Extract text field from document
    fn extract_text(doc: &TantivyDocument, field: Field) -> String {
        doc.get_first(field)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    }
}
