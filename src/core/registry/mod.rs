//! Documentation registry.
//!
//! Maps slugs to documentation entries. The registry is populated
//! once through [`RegistryBuilder`] and is read-only afterwards, so it
//! can be shared across request handlers without locking.

mod content;

use crate::core::error::{Result, SiteError};
use crate::core::types::DocumentationEntry;
use indexmap::IndexMap;
use std::path::Path;
use walkdir::WalkDir;

/// Slug of the documentation landing entry
pub const INDEX_SLUG: &str = "";

/// Read-only slug -> entry mapping, in insertion order
#[derive(Debug, Clone)]
pub struct Registry {
    entries: IndexMap<String, DocumentationEntry>,
}

/// Collects entries and checks the registry invariants on `build`
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: IndexMap<String, DocumentationEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, rejecting a slug that is already present or that
    /// cannot be served as `/documentation/{slug}`
    pub fn add(&mut self, entry: DocumentationEntry) -> Result<&mut Self> {
        if !is_valid_slug(&entry.slug) {
            return Err(SiteError::InvalidContent(format!(
                "Slug {:?} is not a single URL path segment",
                entry.slug
            )));
        }
        if self.entries.contains_key(&entry.slug) {
            return Err(SiteError::DuplicateSlug(entry.slug));
        }
        self.entries.insert(entry.slug.clone(), entry);
        Ok(self)
    }

    /// Finish population. Fails unless the index entry was added.
    pub fn build(self) -> Result<Registry> {
        if !self.entries.contains_key(INDEX_SLUG) {
            return Err(SiteError::MissingIndexEntry);
        }
        Ok(Registry {
            entries: self.entries,
        })
    }
}

/// A slug must be the index slug or one path segment of
/// `[A-Za-z0-9_.-]`, other than `.` and `..`
fn is_valid_slug(slug: &str) -> bool {
    if slug == INDEX_SLUG {
        return true;
    }
    slug != "."
        && slug != ".."
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry populated from the built-in page definitions
    pub fn builtin() -> Result<Self> {
        let mut builder = Self::builder();
        for entry in content::builtin_entries() {
            builder.add(entry)?;
        }
        builder.build()
    }

    /// Registry populated from a directory of `*.toml` entry files.
    ///
    /// Files are read in path order; each file holds one entry. A file
    /// without a `slug` key defines the index entry.
    pub fn from_content_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(SiteError::InvalidContent(format!(
                "Content directory not found: {}",
                dir.display()
            )));
        }

        let mut builder = Self::builder();
        let walker = WalkDir::new(dir).sort_by_file_name().into_iter();

        for dir_entry in walker {
            let dir_entry = dir_entry.map_err(|e| {
                SiteError::InvalidContent(format!("Failed to walk {}: {e}", dir.display()))
            })?;
            let path = dir_entry.path();
            if !dir_entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("toml")
            {
                continue;
            }

            let raw = std::fs::read_to_string(path)?;
            let entry: DocumentationEntry = toml::from_str(&raw).map_err(|e| {
                SiteError::InvalidContent(format!("{}: {e}", path.display()))
            })?;
            tracing::debug!(slug = %entry.slug, path = %path.display(), "Loaded documentation entry");
            builder.add(entry)?;
        }

        builder.build()
    }

    /// Look up an entry by slug
    pub fn get(&self, slug: &str) -> Result<&DocumentationEntry> {
        self.entries
            .get(slug)
            .ok_or_else(|| SiteError::PageNotFound(slug.to_string()))
    }

    /// The documentation landing entry
    pub fn index_entry(&self) -> &DocumentationEntry {
        // present by construction, see RegistryBuilder::build
        &self.entries[INDEX_SLUG]
    }

    /// All entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &DocumentationEntry> {
        self.entries.values()
    }

    /// Entries listed in a navigation menu.
    ///
    /// Excludes the index entry; restricted to `category` when given.
    pub fn menu_entries<'a>(
        &'a self,
        category: Option<&'a str>,
    ) -> impl Iterator<Item = &'a DocumentationEntry> + 'a {
        self.entries
            .values()
            .filter(|entry| !entry.is_index())
            .filter(move |entry| match category {
                Some(category) => entry.category.as_deref() == Some(category),
                None => true,
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
