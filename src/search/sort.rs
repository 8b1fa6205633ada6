//! Date-based ordering of search results.
//!
//! Timestamps are compared as instants. A timestamp that does not parse sorts
//! after every valid one, whichever direction the strategy uses, and articles
//! whose timestamps are both invalid (or equal) keep their input order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::{Article, SortStrategy};

/// Return a sorted copy of `articles`. The input is left untouched.
pub fn sort<'a>(articles: &[&'a Article], strategy: SortStrategy) -> Vec<&'a Article> {
    let (key, descending): (fn(&Article) -> Option<DateTime<Utc>>, bool) = match strategy {
        SortStrategy::Relevance => return articles.to_vec(),
        SortStrategy::Newest => (Article::created, true),
        SortStrategy::Oldest => (Article::created, false),
        SortStrategy::RecentlyUpdated => (Article::updated, true),
        SortStrategy::RecentlyEdited => (Article::edited, true),
    };

    let mut keyed: Vec<(Option<DateTime<Utc>>, &'a Article)> =
        articles.iter().map(|article| (key(article), *article)).collect();

    // `sort_by` is stable, which keeps ties in input order.
    keyed.sort_by(|(a, _), (b, _)| compare_instants(a, b, descending));
    keyed.into_iter().map(|(_, article)| article).collect()
}

/// Order two optional instants with invalid (`None`) values last.
fn compare_instants(
    a: &Option<DateTime<Utc>>,
    b: &Option<DateTime<Utc>>,
    descending: bool,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(a),
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn article(id: i64, created: &str, updated: &str, edited: Option<&str>) -> Article {
        Article {
            id: Value::from(id),
            title: format!("Article {id}"),
            description: String::new(),
            body: String::new(),
            url: String::new(),
            section_id: None,
            created_at: created.to_string(),
            updated_at: updated.to_string(),
            edited_at: edited.map(String::from),
        }
    }

    fn ids(articles: &[&Article]) -> Vec<i64> {
        articles.iter().filter_map(|a| a.id.as_i64()).collect()
    }

    fn sample() -> Vec<Article> {
        vec![
            article(1, "2024-02-01T00:00:00Z", "2024-03-01T00:00:00Z", None),
            article(2, "2024-01-01T00:00:00Z", "2024-05-01T00:00:00Z", Some("2024-04-01T00:00:00Z")),
            article(3, "2024-03-01T00:00:00Z", "2024-04-01T00:00:00Z", None),
        ]
    }

    #[test]
    fn test_newest_and_oldest() {
        let data = sample();
        let refs: Vec<&Article> = data.iter().collect();
        assert_eq!(ids(&sort(&refs, SortStrategy::Newest)), vec![3, 1, 2]);
        assert_eq!(ids(&sort(&refs, SortStrategy::Oldest)), vec![2, 1, 3]);
    }

    #[test]
    fn test_recently_updated() {
        let data = sample();
        let refs: Vec<&Article> = data.iter().collect();
        assert_eq!(ids(&sort(&refs, SortStrategy::RecentlyUpdated)), vec![2, 3, 1]);
    }

    #[test]
    fn test_recently_edited_falls_back_to_created() {
        let data = sample();
        let refs: Vec<&Article> = data.iter().collect();
        // 2 edited 2024-04, 3 created 2024-03, 1 created 2024-02
        assert_eq!(ids(&sort(&refs, SortStrategy::RecentlyEdited)), vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_edit_equals_explicit_created() {
        let implicit = vec![
            article(1, "2024-02-01T00:00:00Z", "x", None),
            article(2, "2024-01-15T00:00:00Z", "x", Some("2024-01-20T00:00:00Z")),
        ];
        let explicit = vec![
            article(1, "2024-02-01T00:00:00Z", "x", Some("2024-02-01T00:00:00Z")),
            article(2, "2024-01-15T00:00:00Z", "x", Some("2024-01-20T00:00:00Z")),
        ];
        let a: Vec<&Article> = implicit.iter().collect();
        let b: Vec<&Article> = explicit.iter().collect();
        assert_eq!(
            ids(&sort(&a, SortStrategy::RecentlyEdited)),
            ids(&sort(&b, SortStrategy::RecentlyEdited))
        );
    }

    #[test]
    fn test_relevance_keeps_input_order() {
        let data = sample();
        let refs: Vec<&Article> = data.iter().collect();
        assert_eq!(ids(&sort(&refs, SortStrategy::Relevance)), vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_timestamps_sort_last_both_directions() {
        let data = vec![
            article(1, "not a date", "x", None),
            article(2, "2024-01-01T00:00:00Z", "x", None),
            article(3, "", "x", None),
            article(4, "2024-06-01T00:00:00Z", "x", None),
        ];
        let refs: Vec<&Article> = data.iter().collect();
        assert_eq!(ids(&sort(&refs, SortStrategy::Newest)), vec![4, 2, 1, 3]);
        assert_eq!(ids(&sort(&refs, SortStrategy::Oldest)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_instant_not_string_comparison() {
        // Same instant, different offsets; later string is earlier instant.
        let data = vec![
            article(1, "2024-01-01T09:00:00+09:00", "x", None),
            article(2, "2024-01-01T01:00:00Z", "x", None),
        ];
        let refs: Vec<&Article> = data.iter().collect();
        assert_eq!(ids(&sort(&refs, SortStrategy::Newest)), vec![2, 1]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let data = sample();
        let refs: Vec<&Article> = data.iter().collect();
        for strategy in [
            SortStrategy::Newest,
            SortStrategy::Oldest,
            SortStrategy::RecentlyUpdated,
            SortStrategy::RecentlyEdited,
        ] {
            let once = sort(&refs, strategy);
            let twice = sort(&once, strategy);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(sort(&[], SortStrategy::Newest).is_empty());
    }
}
