// src/services/articles.rs

//! Help-center article fetcher.
//!
//! Walks the paginated articles endpoint, following `next_page` until the API
//! stops returning one, and pauses between pages to stay under rate limits.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{ArticlePage, Config, RawArticle};
use crate::utils::http;

/// Summary of a fetch run.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub articles: Vec<RawArticle>,
    pub page_count: usize,
}

/// Service for downloading every article from the help-center API.
pub struct ArticleFetcher {
    config: Arc<Config>,
    client: Client,
}

impl ArticleFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_async_client(&config.fetch)?;
        Ok(Self { config, client })
    }

    /// Fetch all pages, concatenating their articles in page order.
    pub async fn fetch_all(&self) -> Result<FetchOutcome> {
        let delay = Duration::from_millis(self.config.fetch.page_delay_ms);
        let mut outcome = FetchOutcome::default();
        let mut page = 1u32;

        log::info!("Fetching articles from {}", self.config.fetch.base_url);

        loop {
            let result = self.fetch_page(page).await?;
            log::info!("Fetched page {} with {} articles", page, result.articles.len());

            outcome.page_count += 1;
            outcome.articles.extend(result.articles);

            if !has_next_page(result.next_page.as_deref()) {
                break;
            }

            page = page
                .checked_add(1)
                .ok_or_else(|| AppError::fetch("pagination", "page counter overflowed"))?;

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        Ok(outcome)
    }

    /// Fetch a single page of articles.
    async fn fetch_page(&self, page: u32) -> Result<ArticlePage> {
        let query = [
            ("per_page", self.config.fetch.per_page.to_string()),
            ("page", page.to_string()),
        ];
        http::fetch_json(&self.client, &self.config.fetch.base_url, &query)
            .await
            .map_err(|e| AppError::fetch(format!("page {page}"), e))
    }
}

/// Whether the API advertised another page.
fn has_next_page(next_page: Option<&str>) -> bool {
    next_page.is_some_and(|next| !next.trim().is_empty())
}
