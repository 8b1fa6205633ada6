//! Storage abstractions for index persistence.
//!
//! The index builder writes two artifacts and the search side reads one:
//!
//! ```text
//! data/
//! ├── config.toml           # Configuration
//! ├── articles.json         # Raw archive: every field the API returned
//! └── search-index.json     # Trimmed records loaded by the search pipeline
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Article, RawArticle};
use crate::search::{ArticleIndex, LoadReport};

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for article storage backends.
#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Write the raw full-article archive.
    async fn write_archive(&self, articles: &[RawArticle]) -> Result<()>;

    /// Write the trimmed search index.
    async fn write_index(&self, articles: &[Article]) -> Result<()>;

    /// Load the search index, skipping malformed records.
    async fn load_index(&self) -> Result<(ArticleIndex, LoadReport)>;
}
