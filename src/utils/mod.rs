//! Utility functions and helpers.

pub mod http;
pub mod text;

pub use text::{escape_html, html_to_text, normalize_query, query_terms, term_pattern};
