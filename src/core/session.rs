//! Per-browser session storage.
//!
//! Each browser is identified by a random [`BrowserId`] carried in a
//! signed cookie. Values are stored per browser behind the
//! [`SessionStore`] trait so handlers receive storage as an explicit
//! capability.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use sha2::{Digest, Sha256};
use moka::future::Cache;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use crate::core::config::{SessionConfig, MAX_COOKIE_MAX_AGE_DAYS};

/// Session key holding the dark mode preference
pub const DARK_MODE_KEY: &str = "dark_mode";

const MAX_IDLE_TIMEOUT: Duration = Duration::from_secs(MAX_COOKIE_MAX_AGE_DAYS * 24 * 60 * 60);

/// Opaque per-browser identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrowserId(String);

impl BrowserId {
    /// Mint a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accept only well-formed identifiers
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(|id| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrowserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signs and verifies browser identity cookie values.
///
/// Cookie value format: `<uuid>.<base64url(sha256(secret \0 uuid))>`
#[derive(Clone)]
pub struct CookieSigner {
    secret: Vec<u8>,
}

impl fmt::Debug for CookieSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl CookieSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
        }
    }

    fn signature(&self, id: &BrowserId) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.secret);
        hasher.update([0u8]);
        hasher.update(id.as_str().as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }

    /// Produce the cookie value for `id`
    pub fn sign(&self, id: &BrowserId) -> String {
        format!("{}.{}", id, self.signature(id))
    }

    /// Recover the browser id from a cookie value, if the signature holds
    pub fn verify(&self, value: &str) -> Option<BrowserId> {
        let (raw_id, signature) = value.split_once('.')?;
        let id = BrowserId::parse(raw_id)?;
        let expected = self.signature(&id);
        constant_time_eq(expected.as_bytes(), signature.as_bytes()).then_some(id)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Key/value storage scoped to one browser
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value; `None` when the key was never set or has expired
    async fn get(&self, browser: &BrowserId, key: &str) -> Option<Value>;

    /// Write a value, replacing any previous one
    async fn set(&self, browser: &BrowserId, key: &str, value: Value);

    /// Number of browsers with stored values
    async fn browser_count(&self) -> u64;
}

type BrowserValues = HashMap<String, Value>;

/// In-memory session store.
///
/// A browser's values are dropped once untouched for the idle timeout,
/// and browsers beyond `max_browsers` are evicted.
#[derive(Clone)]
pub struct MemorySessionStore {
    browsers: Cache<BrowserId, BrowserValues>,
}

impl fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySessionStore")
            .field("browsers", &self.browsers.entry_count())
            .finish()
    }
}

impl MemorySessionStore {
    pub fn new(max_browsers: u64, idle_timeout: Duration) -> Self {
        let browsers = Cache::builder()
            .max_capacity(max_browsers)
            .time_to_idle(idle_timeout.min(MAX_IDLE_TIMEOUT))
            .build();

        Self { browsers }
    }

    /// Store sized from the session configuration
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.max_browsers, config.idle_timeout())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, browser: &BrowserId, key: &str) -> Option<Value> {
        self.browsers
            .get(browser)
            .await
            .and_then(|mut values| values.remove(key))
    }

    async fn set(&self, browser: &BrowserId, key: &str, value: Value) {
        self.browsers
            .entry_by_ref(browser)
            .and_upsert_with(|existing| {
                let mut values = existing.map(|entry| entry.into_value()).unwrap_or_default();
                values.insert(key.to_string(), value);
                std::future::ready(values)
            })
            .await;
    }

    async fn browser_count(&self) -> u64 {
        self.browsers.run_pending_tasks().await;
        self.browsers.entry_count()
    }
}
