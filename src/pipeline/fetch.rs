// src/pipeline/fetch.rs

//! Index builder pipeline.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Article, Config, FetchStats, RawArticle};
use crate::services::ArticleFetcher;
use crate::storage::ArticleStorage;

/// Trim raw API records down to the fields the search index carries.
pub fn build_search_index(articles: &[RawArticle]) -> Vec<Article> {
    articles.iter().map(Article::from).collect()
}

/// Fetch every article, then write the raw archive and the search index.
pub async fn run_fetch(config: Arc<Config>, storage: &dyn ArticleStorage) -> Result<FetchStats> {
    let start_time = Utc::now();
    log::info!("Index build starting...");

    let fetcher = ArticleFetcher::new(Arc::clone(&config))?;
    let outcome = fetcher.fetch_all().await?;

    storage.write_archive(&outcome.articles).await?;

    let index = build_search_index(&outcome.articles);
    storage.write_index(&index).await?;

    let stats = FetchStats {
        start_time,
        end_time: Utc::now(),
        page_count: outcome.page_count,
        article_count: index.len(),
    };

    log::info!(
        "Fetched {} articles across {} pages in {}s",
        stats.article_count,
        stats.page_count,
        (stats.end_time - stats.start_time).num_seconds()
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_index_keeps_order_and_maps_url() {
        let raw: Vec<RawArticle> = serde_json::from_str(
            r#"[
                {"id": 2, "title": "B", "body": "<p>b</p>", "html_url": "https://h/2",
                 "url": "https://api/2.json", "section_id": 1,
                 "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"},
                {"id": 1, "title": "A", "body": "<p>a</p>", "html_url": "https://h/1",
                 "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        let index = build_search_index(&raw);
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].title, "B");
        assert_eq!(index[0].url, "https://h/2");
        assert_eq!(index[1].url, "https://h/1");
    }
}
