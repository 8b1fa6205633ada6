//! In-memory article index.
//!
//! The index is loaded once from the JSON array written by the index builder
//! and is never mutated afterwards.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::Article;

/// Outcome of loading an index: what was kept and what was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Immutable collection of articles available to search.
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    articles: Vec<Article>,
}

impl ArticleIndex {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Parse an index from JSON bytes.
    ///
    /// The top level must be an array. Entries that do not deserialize as an
    /// [`Article`] (missing `title` or `body`, wrong types) are skipped with a
    /// warning; the remaining entries are kept in order.
    pub fn from_json_slice(bytes: &[u8]) -> Result<(Self, LoadReport)> {
        let value: Value = serde_json::from_slice(bytes)?;
        let Value::Array(entries) = value else {
            return Err(AppError::index_load("search index is not a JSON array"));
        };

        let mut report = LoadReport::default();
        let mut articles = Vec::with_capacity(entries.len());
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Article>(entry) {
                Ok(article) => articles.push(article),
                Err(e) => {
                    report.skipped += 1;
                    log::warn!("Skipping malformed article at position {}: {}", position, e);
                }
            }
        }
        report.loaded = articles.len();

        Ok((Self { articles }, report))
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortStrategy;
    use crate::search::sort;

    #[test]
    fn test_load_skips_malformed_entries() {
        let json = br#"[
            {"id": 1, "title": "Realms", "description": "", "body": "<p>x</p>",
             "url": "https://example.com/1", "section_id": 3,
             "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-02T00:00:00Z"},
            {"id": 2, "description": "no title or body"},
            {"id": 3, "title": "Servers", "body": "",
             "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-02T00:00:00Z",
             "edited_at": "2024-01-03T00:00:00Z"}
        ]"#;

        let (index, report) = ArticleIndex::from_json_slice(json).unwrap();
        assert_eq!(report, LoadReport { loaded: 2, skipped: 1 });
        assert_eq!(index.len(), 2);
        assert_eq!(index.articles()[0].title, "Realms");
        assert_eq!(index.articles()[1].edited_at.as_deref(), Some("2024-01-03T00:00:00Z"));
    }

    #[test]
    fn test_null_fields_keep_the_article() {
        let json = br#"[
            {"id": 1, "title": "Realms", "body": "", "description": null,
             "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-02T00:00:00Z"},
            {"id": 2, "title": "Servers", "body": "", "description": "",
             "created_at": null, "updated_at": null},
            {"id": 3, "title": "Skins", "body": "", "edited_at": null,
             "created_at": "2024-02-01T00:00:00Z", "updated_at": "2024-02-02T00:00:00Z"}
        ]"#;

        let (index, report) = ArticleIndex::from_json_slice(json).unwrap();
        assert_eq!(report, LoadReport { loaded: 3, skipped: 0 });

        let refs: Vec<&Article> = index.articles().iter().collect();
        let ids: Vec<Value> = sort(&refs, SortStrategy::Newest)
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(ids, vec![Value::from(3), Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_load_rejects_non_array() {
        let err = ArticleIndex::from_json_slice(br#"{"articles": []}"#).unwrap_err();
        assert!(matches!(err, AppError::IndexLoad(_)));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let err = ArticleIndex::from_json_slice(b"[{").unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_empty_index() {
        let (index, report) = ArticleIndex::from_json_slice(b"[]").unwrap();
        assert!(index.is_empty());
        assert_eq!(report.loaded, 0);
    }
}
