//! Query preprocessing for the documentation search box.
//!
//! Visitors type API names like `ui.button(on_click=...)` or URL paths
//! like `/documentation/{name}` that would otherwise trip Tantivy's query
//! syntax. This module rewrites such input into a query that parses:
//! - Quoted phrases are kept, with their inner special characters escaped
//! - `field:value` terms are kept when `field` is a searchable field
//! - Every other special character is escaped

use crate::core::error::SiteError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Fields a visitor may address with a `field:value` prefix
pub const SEARCHABLE_FIELDS: [&str; 4] = ["title", "summary", "keywords", "content"];

// word:rest at the start of a whitespace-delimited token
static FIELD_PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+):(\S+)$").expect("field prefix pattern is valid"));

/// Preprocess a query string for Tantivy compatibility.
///
/// # Examples
///
/// ```
/// use docsite::core::search::preprocess_query;
///
/// assert_eq!(preprocess_query("/documentation/{name}"), "\\/documentation\\/\\{name\\}");
/// assert_eq!(preprocess_query("title:button"), "title:button");
/// assert_eq!(preprocess_query("\"dark mode\""), "\"dark mode\"");
/// ```
pub fn preprocess_query(query: &str) -> String {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return String::new();
    }

    // Fully quoted: a single phrase query
    if trimmed.len() > 1 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        let inner = &trimmed[1..trimmed.len() - 1];
        return format!("\"{}\"", escape_all_special(inner));
    }

    trimmed
        .split_whitespace()
        .map(preprocess_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn preprocess_token(token: &str) -> String {
    if let Some(cap) = FIELD_PREFIX_PATTERN.captures(token) {
        let field = &cap[1];
        if SEARCHABLE_FIELDS.contains(&field) {
            return format!("{field}:{}", escape_all_special(&cap[2]));
        }
    }
    escape_all_special(token)
}

/// Escape every character Tantivy's query grammar treats specially.
fn escape_all_special(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        match ch {
            ':' | '{' | '}' | '[' | ']' | '(' | ')' | '@' | '"' | '\\' | '+' | '-' | '!' | '^'
            | '~' | '*' | '?' | '/' | '<' | '>' | '=' | '&' | '|' | '\'' | '`' => {
                result.push('\\');
                result.push(ch);
            }
            _ => result.push(ch),
        }
    }
    result
}

/// Reject queries that cannot be searched.
pub fn validate_query(query: &str, max_length: usize) -> Result<(), SiteError> {
    if query.trim().is_empty() {
        return Err(SiteError::InvalidQuery(
            "Query cannot be empty".to_string(),
        ));
    }

    let length = query.chars().count();
    if length > max_length {
        return Err(SiteError::InvalidQuery(format!(
            "Query is {length} characters long, the limit is {max_length}"
        )));
    }

    Ok(())
}
