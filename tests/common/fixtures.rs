// Test fixtures for integration testing

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Content directory fixture holding TOML documentation entries
#[allow(dead_code)] // Used in integration tests
pub struct TestContent {
    pub dir: TempDir,
}

impl TestContent {
    /// A small documentation tree: index, two controls, one text page
    #[allow(dead_code)] // Used in integration tests
    pub fn sample() -> Self {
        Self::with_entries(&[
            (
                "00_index.toml",
                r#"
                    title = "Documentation"
                    summary = "Everything about the framework"

                    [[sections]]
                    title = "Overview"
                    paragraphs = ["Welcome to the documentation."]
                "#,
            ),
            (
                "controls/button.toml",
                r#"
                    slug = "button"
                    title = "Button"
                    summary = "A clickable button"
                    keywords = ["click", "press"]
                    category = "controls"

                    [[sections]]
                    title = "Basics"
                    paragraphs = ["Buttons trigger actions."]
                    code = "ui.button('Click me!')"
                "#,
            ),
            (
                "controls/slider.toml",
                r#"
                    slug = "slider"
                    title = "Slider"
                    summary = "Pick a number in a range"
                    category = "controls"
                "#,
            ),
            (
                "text/label.toml",
                r#"
                    slug = "label"
                    title = "Label"
                    summary = "Displays text"
                    category = "text"
                "#,
            ),
        ])
    }

    /// Create a content directory with custom entry files
    #[allow(dead_code)] // Used in integration tests
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in entries {
            write_file(dir.path(), name, content.as_bytes());
        }
        Self { dir }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Static asset tree fixture (favicon/, fonts/, static/)
#[allow(dead_code)] // Used in integration tests
pub struct TestAssets {
    pub dir: TempDir,
}

impl TestAssets {
    #[allow(dead_code)] // Used in integration tests
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_file(dir.path(), "favicon/favicon.ico", b"ico");
        write_file(dir.path(), "fonts/fira.woff2", b"font");
        write_file(dir.path(), "static/style.css", b"body { margin: 0; }");
        write_file(dir.path(), "static/logo.png", b"logo");
        write_file(dir.path(), "static/logo_square.png", b"square logo");
        Self { dir }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

fn write_file(root: &Path, name: &str, content: &[u8]) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture dir");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}
