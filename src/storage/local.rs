//! Local filesystem storage implementation.
//!
//! Writes go to a temporary file that is then renamed over the target, so a
//! reader never sees a half-written index.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{Article, PathsConfig, RawArticle};
use crate::search::{ArticleIndex, LoadReport};
use crate::storage::ArticleStorage;

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    paths: PathsConfig,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self::with_paths(root_dir, PathsConfig::default())
    }

    /// Create a LocalStorage with custom artifact file names.
    pub fn with_paths(root_dir: impl Into<PathBuf>, paths: PathsConfig) -> Self {
        Self {
            root_dir: root_dir.into(),
            paths,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Full path of the search index file.
    pub fn index_path(&self) -> PathBuf {
        self.path(&self.paths.index_file)
    }

    /// Full path of the raw archive file.
    pub fn archive_path(&self) -> PathBuf {
        self.path(&self.paths.articles_file)
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    /// Write pretty-printed JSON.
    async fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(path, &bytes).await
    }
}

#[async_trait]
impl ArticleStorage for LocalStorage {
    async fn write_archive(&self, articles: &[RawArticle]) -> Result<()> {
        let path = self.archive_path();
        self.write_json(&path, articles).await?;
        log::info!("Saved {} raw articles to {}", articles.len(), path.display());
        Ok(())
    }

    async fn write_index(&self, articles: &[Article]) -> Result<()> {
        let path = self.index_path();
        self.write_json(&path, articles).await?;
        log::info!(
            "Generated search index with {} entries at {}",
            articles.len(),
            path.display()
        );
        Ok(())
    }

    async fn load_index(&self) -> Result<(ArticleIndex, LoadReport)> {
        let path = self.index_path();
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::index_load(format!(
                    "search index not found at {}",
                    path.display()
                )));
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let (index, report) = ArticleIndex::from_json_slice(&bytes)
            .map_err(|e| AppError::index_load(format!("{}: {}", path.display(), e)))?;

        if report.skipped > 0 {
            log::warn!(
                "Skipped {} malformed articles while loading {}",
                report.skipped,
                path.display()
            );
        }
        log::debug!("Loaded {} articles from {}", report.loaded, path.display());

        Ok((index, report))
    }
}
