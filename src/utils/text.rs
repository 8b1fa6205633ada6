// src/utils/text.rs

//! Plain-text helpers shared by the excerpt and highlight stages.

use regex::{Regex, RegexBuilder};
use scraper::Html;

use crate::error::Result;

/// Strip markup from an HTML fragment and return its trimmed text content.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    text.trim().to_string()
}

/// Split a normalized query into highlight terms.
pub fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(String::from).collect()
}

/// Normalize raw user input into a query: trimmed and lower-cased.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Build a case-insensitive pattern matching any of `terms` literally.
///
/// Returns `None` when there is no non-empty term.
pub fn term_pattern<S: AsRef<str>>(terms: &[S]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = terms
        .iter()
        .map(AsRef::as_ref)
        .filter(|term| !term.is_empty())
        .map(regex::escape)
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()?;
    Ok(Some(pattern))
}

/// Escape text for insertion into HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
