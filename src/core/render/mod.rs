//! HTML page rendering.
//!
//! Turns registry entries into complete HTML documents using Tera
//! templates embedded in the binary.

mod templates;

use crate::core::error::Result;
use crate::core::registry::Registry;
use crate::core::types::DocumentationEntry;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tera::{Context, Tera};

/// Appearance requested by the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    Dark,
    Light,
    /// Follow the operating system preference
    #[default]
    Auto,
}

impl DarkMode {
    /// Interpret a stored session value. Anything but a boolean means auto.
    pub fn from_session_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(true)) => DarkMode::Dark,
            Some(Value::Bool(false)) => DarkMode::Light,
            _ => DarkMode::Auto,
        }
    }
}

/// Per-request rendering inputs
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub dark_mode: DarkMode,
}

/// Link in a navigation menu or index listing
#[derive(Debug, Clone, Serialize)]
struct MenuItem<'a> {
    title: &'a str,
    summary: &'a str,
    url: String,
    active: bool,
}

/// Renders landing and documentation pages
pub struct PageRenderer {
    tera: Tera,
    registry: Arc<Registry>,
    site_title: String,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("site_title", &self.site_title)
            .finish()
    }
}

impl PageRenderer {
    /// Compile the embedded templates
    pub fn new(registry: Arc<Registry>, site_title: impl Into<String>) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates::TEMPLATES)?;

        Ok(Self {
            tera,
            registry,
            site_title: site_title.into(),
        })
    }

    fn base_context(&self, ctx: &PageContext) -> Context {
        let mut context = Context::new();
        context.insert("site_title", &self.site_title);
        context.insert("dark_mode", &ctx.dark_mode);
        context
    }

    /// Render the landing page at `/`
    pub fn render_main_page(&self, ctx: &PageContext) -> Result<String> {
        let context = self.base_context(ctx);
        Ok(self.tera.render("main.html", &context)?)
    }

    /// Render a documentation entry.
    ///
    /// With `with_menu`, a navigation menu lists the entries of the same
    /// category (all non-index entries when the entry has none). The
    /// index entry additionally links every page from its body.
    pub fn render_page(
        &self,
        entry: &DocumentationEntry,
        with_menu: bool,
        ctx: &PageContext,
    ) -> Result<String> {
        let mut context = self.base_context(ctx);
        context.insert("entry", entry);
        context.insert("with_menu", &with_menu);

        let menu: Vec<MenuItem> = if with_menu {
            self.registry
                .menu_entries(entry.category.as_deref())
                .map(|item| Self::menu_item(item, entry))
                .collect()
        } else {
            Vec::new()
        };
        context.insert("menu", &menu);

        let links: Vec<MenuItem> = if entry.is_index() {
            self.registry
                .menu_entries(None)
                .map(|item| Self::menu_item(item, entry))
                .collect()
        } else {
            Vec::new()
        };
        context.insert("links", &links);

        Ok(self.tera.render("documentation.html", &context)?)
    }

    /// Render the page shown for an unknown slug
    pub fn render_not_found(&self, slug: &str, ctx: &PageContext) -> Result<String> {
        let mut context = self.base_context(ctx);
        context.insert("slug", slug);
        Ok(self.tera.render("not_found.html", &context)?)
    }

    fn menu_item<'a>(item: &'a DocumentationEntry, current: &DocumentationEntry) -> MenuItem<'a> {
        MenuItem {
            title: &item.title,
            summary: &item.summary,
            url: item.url(),
            active: item.slug == current.slug,
        }
    }
}
