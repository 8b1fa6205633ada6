// src/models/mod.rs

//! Domain models for the article search application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod article;
mod config;
mod search;

// Re-export all public types
pub use article::{Article, ArticlePage, RawArticle, parse_timestamp};
pub use config::{Config, FetchConfig, PathsConfig, SearchConfig};
pub use search::{ExclusionRules, SortStrategy};

/// Summary of an index build run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FetchStats {
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub page_count: usize,
    pub article_count: usize,
}
