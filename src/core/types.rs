//! Core data types for the documentation site.
//!
//! This module defines the documentation entries held by the
//! registry and the request/response shapes of the search API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single documentation page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationEntry {
    /// Unique identifier and URL path segment; the empty string is the
    /// documentation index
    #[serde(default)]
    pub slug: String,

    /// Page title
    pub title: String,

    /// One-line description, shown in menus and search results
    #[serde(default)]
    pub summary: String,

    /// Extra search terms not present in the body
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Menu grouping; entries without a category share the global menu
    #[serde(default)]
    pub category: Option<String>,

    /// Body content
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A titled block of body content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Example source shown below the text
    #[serde(default)]
    pub code: Option<String>,
}

impl DocumentationEntry {
    /// Create an entry with no body
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: String::new(),
            keywords: Vec::new(),
            category: None,
            sections: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Whether this is the documentation landing entry
    pub fn is_index(&self) -> bool {
        self.slug.is_empty()
    }

    /// URL path of the rendered page
    pub fn url(&self) -> String {
        if self.is_index() {
            "/documentation".to_string()
        } else {
            format!("/documentation/{}", self.slug)
        }
    }

    /// All body text joined for full-text indexing
    pub fn body_text(&self) -> String {
        let mut text = String::new();
        for section in &self.sections {
            if let Some(title) = &section.title {
                text.push_str(title);
                text.push('\n');
            }
            for paragraph in &section.paragraphs {
                text.push_str(paragraph);
                text.push('\n');
            }
            if let Some(code) = &section.code {
                text.push_str(code);
                text.push('\n');
            }
        }
        text
    }
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            paragraphs: Vec::new(),
            code: None,
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Search hit returned by query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// BM25 relevance score (higher = more relevant)
    pub score: f32,

    pub slug: String,
    pub title: String,
    pub summary: String,

    /// Link to the rendered page
    pub url: String,
}

/// Search API query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Query string
    pub q: String,

    /// Number of results to return (optional)
    #[serde(default)]
    pub k: Option<usize>,
}

/// Search API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub count: usize,
    pub duration_ms: u64,
}

/// Summary of a search index build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndexStats {
    /// Number of entries indexed
    pub documents: usize,

    pub built_at: DateTime<Utc>,
    pub duration_ms: u64,
}
