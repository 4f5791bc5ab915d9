//! Tantivy index over the documentation registry.
//!
//! The index lives in RAM and is always built in one pass from the
//! whole registry; there is no incremental update path.

use crate::core::error::{Result, SiteError};
use crate::core::registry::Registry;
use tantivy::schema::*;
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy};

// Single-threaded writer keeps the segment layout (and thus scores)
// identical from one build to the next.
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Create the Tantivy schema for documentation entries
///
/// Fields:
/// - slug: Entry identifier (STRING | STORED)
/// - title: Page title (TEXT | STORED)
/// - summary: One-line description (TEXT | STORED)
/// - keywords: Extra search terms (TEXT)
/// - content: Section titles, paragraphs and code (TEXT)
pub fn create_schema() -> Schema {
    let mut builder = Schema::builder();

    builder.add_text_field("slug", STRING | STORED);
    builder.add_text_field("title", TEXT | STORED);
    builder.add_text_field("summary", TEXT | STORED);
    builder.add_text_field("keywords", TEXT);
    builder.add_text_field("content", TEXT);

    builder.build()
}

/// Resolved schema fields
#[derive(Debug, Clone, Copy)]
pub struct IndexFields {
    pub slug: Field,
    pub title: Field,
    pub summary: Field,
    pub keywords: Field,
    pub content: Field,
}

impl IndexFields {
    fn resolve(schema: &Schema) -> Result<Self> {
        let field = |name: &str| {
            schema
                .get_field(name)
                .map_err(|e| SiteError::SearchFailed(format!("Missing {name} field: {e}")))
        };

        Ok(Self {
            slug: field("slug")?,
            title: field("title")?,
            summary: field("summary")?,
            keywords: field("keywords")?,
            content: field("content")?,
        })
    }
}

/// A fully committed, searchable index
pub struct BuiltIndex {
    index: Index,
    reader: IndexReader,
    fields: IndexFields,
    documents: usize,
}

impl std::fmt::Debug for BuiltIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltIndex")
            .field("documents", &self.documents)
            .finish()
    }
}

impl BuiltIndex {
    /// Index every registry entry and commit.
    pub fn build(registry: &Registry) -> Result<Self> {
        let schema = create_schema();
        let fields = IndexFields::resolve(&schema)?;
        let index = Index::create_in_ram(schema);

        let mut writer: IndexWriter = index
            .writer_with_num_threads(1, WRITER_HEAP_BYTES)
            .map_err(|e| SiteError::SearchFailed(format!("Failed to create writer: {e}")))?;

        let mut documents = 0;
        for entry in registry.entries() {
            let document = doc!(
                fields.slug => entry.slug.as_str(),
                fields.title => entry.title.as_str(),
                fields.summary => entry.summary.as_str(),
                fields.keywords => entry.keywords.join(" "),
                fields.content => entry.body_text(),
            );

            writer
                .add_document(document)
                .map_err(|e| SiteError::SearchFailed(format!("Failed to add document: {e}")))?;
            documents += 1;
        }

        writer
            .commit()
            .map_err(|e| SiteError::SearchFailed(format!("Failed to commit: {e}")))?;

        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| SiteError::SearchFailed(format!("Failed to create reader: {e}")))?;

        Ok(Self {
            index,
            reader,
            fields,
            documents,
        })
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn reader(&self) -> &IndexReader {
        &self.reader
    }

    pub fn fields(&self) -> IndexFields {
        self.fields
    }

    /// Number of entries indexed
    pub fn documents(&self) -> usize {
        self.documents
    }
}
