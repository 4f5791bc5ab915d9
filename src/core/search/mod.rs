//! Search module for BM25 full-text search.
//!
//! This module indexes the documentation registry with Tantivy and
//! serves ranked queries over it.

mod bm25;
mod index;
mod query;

pub use bm25::SearchService;
pub use index::{create_schema, BuiltIndex};
pub use query::{preprocess_query, validate_query, SEARCHABLE_FIELDS};
