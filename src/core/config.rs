//! Configuration management for the documentation site.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the session-signing secret
pub const SECRET_KEY_ENV: &str = "NICEGUI_SECRET_KEY";

/// Longest cookie lifetime browsers honor (RFC 6265bis caps Max-Age at 400 days)
pub const MAX_COOKIE_MAX_AGE_DAYS: u64 = 400;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Site content and asset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Root of the static asset tree (favicon/, fonts/, static/)
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Directory of TOML documentation entries; built-in pages when unset
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// Site title shown in the page header
    #[serde(default = "default_site_title")]
    pub title: String,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Browser session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Secret used to sign browser identity cookies.
    /// Only ever read from the environment.
    #[serde(skip)]
    pub secret_key: String,

    /// Name of the browser identity cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Cookie lifetime in days; stored preferences expire after the
    /// same period without a visit
    #[serde(default = "default_cookie_max_age_days")]
    pub cookie_max_age_days: u64,

    /// Maximum number of browsers with stored preferences
    #[serde(default = "default_max_browsers")]
    pub max_browsers: u64,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./website")
}

fn default_site_title() -> String {
    "NiceGUI".to_string()
}

fn default_k() -> usize {
    10
}

fn default_max_k() -> usize {
    50
}

fn default_max_query_length() -> usize {
    200
}

fn default_cookie_name() -> String {
    "browser_id".to_string()
}

fn default_cookie_max_age_days() -> u64 {
    30
}

fn default_max_browsers() -> u64 {
    100_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            content_dir: None,
            title: default_site_title(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            cookie_name: default_cookie_name(),
            cookie_max_age_days: default_cookie_max_age_days(),
            max_browsers: default_max_browsers(),
        }
    }
}

impl SessionConfig {
    /// Cookie lifetime in seconds, as sent in `Max-Age`
    pub fn max_age_secs(&self) -> u64 {
        self.cookie_max_age_days.saturating_mul(24 * 60 * 60)
    }

    /// How long a browser's stored values live without being touched
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.max_age_secs())
    }
}

impl SiteConfig {
    pub fn favicon_dir(&self) -> PathBuf {
        self.assets_dir.join("favicon")
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.assets_dir.join("fonts")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.assets_dir.join("static")
    }

    pub fn logo_path(&self) -> PathBuf {
        self.static_dir().join("logo.png")
    }

    pub fn logo_square_path(&self) -> PathBuf {
        self.static_dir().join("logo_square.png")
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SiteError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. `explicit` path (from the command line)
    /// 2. DOCSITE_CONFIG env var
    /// 3. User config dir (~/.config/docsite/config.toml)
    /// 4. ./docsite.toml
    /// 5. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("DOCSITE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let user_config = dirs::config_dir().map(|dir| dir.join("docsite").join("config.toml"));
            match user_config {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ if Path::new("docsite.toml").exists() => Self::from_file("docsite.toml")?,
                _ => Self::default(),
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("DOCSITE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("DOCSITE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Site configuration
        if let Ok(assets_dir) = env::var("DOCSITE_ASSETS_DIR") {
            self.site.assets_dir = PathBuf::from(assets_dir);
        }
        if let Ok(content_dir) = env::var("DOCSITE_CONTENT_DIR") {
            self.site.content_dir = Some(PathBuf::from(content_dir));
        }

        // Search configuration
        if let Ok(default_k) = env::var("DOCSITE_DEFAULT_K") {
            if let Ok(k) = default_k.parse() {
                self.search.default_k = k;
            }
        }
        if let Ok(max_k) = env::var("DOCSITE_MAX_K") {
            if let Ok(k) = max_k.parse() {
                self.search.max_k = k;
            }
        }

        // Session secret; an empty value is accepted
        self.session.secret_key = env::var(SECRET_KEY_ENV).unwrap_or_default();
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_k == 0 {
            return Err(SiteError::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k {
            return Err(SiteError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(SiteError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.session.cookie_name.is_empty()
            || !self
                .session
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(SiteError::ConfigError(format!(
                "Invalid cookie name: {:?}",
                self.session.cookie_name
            )));
        }

        if self.session.cookie_max_age_days == 0
            || self.session.cookie_max_age_days > MAX_COOKIE_MAX_AGE_DAYS
        {
            return Err(SiteError::ConfigError(format!(
                "Cookie max age must be between 1 and {MAX_COOKIE_MAX_AGE_DAYS} days"
            )));
        }

        if self.session.max_browsers == 0 {
            return Err(SiteError::ConfigError(
                "Max browsers must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Assets dir: {:?}", self.site.assets_dir);
        match &self.site.content_dir {
            Some(dir) => tracing::info!("  Content dir: {:?}", dir),
            None => tracing::info!("  Content: built-in pages"),
        }
        tracing::info!("  Default k: {}", self.search.default_k);
        tracing::info!("  Max k: {}", self.search.max_k);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Session cookie: {}", self.session.cookie_name);
        tracing::info!("  Session idle expiry: {} days", self.session.cookie_max_age_days);
        tracing::info!("  Max browsers: {}", self.session.max_browsers);
        if self.session.secret_key.is_empty() {
            tracing::warn!("  {SECRET_KEY_ENV} is not set; browser cookies are signed with an empty key");
        } else {
            tracing::info!("  Session secret: <redacted>");
        }
    }
}
