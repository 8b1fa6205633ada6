//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Help-center API and HTTP behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Result page and excerpt settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Output file names, relative to the data directory
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.base_url.trim().is_empty() {
            return Err(AppError::validation("fetch.base_url is empty"));
        }
        url::Url::parse(&self.fetch.base_url)?;
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if self.fetch.per_page == 0 {
            return Err(AppError::validation("fetch.per_page must be > 0"));
        }
        if self.search.page_size == 0 {
            return Err(AppError::validation("search.page_size must be > 0"));
        }
        if self.paths.index_file.trim().is_empty() {
            return Err(AppError::validation("paths.index_file is empty"));
        }
        Ok(())
    }
}

/// Help-center API settings used by the index builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Articles endpoint of the help-center API
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Articles requested per page
    #[serde(default = "defaults::per_page")]
    pub per_page: u32,

    /// Delay between page requests in milliseconds
    #[serde(default = "defaults::page_delay")]
    pub page_delay_ms: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            per_page: defaults::per_page(),
            page_delay_ms: defaults::page_delay(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Search result presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Articles per result page
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// Characters of context kept on each side of a match
    #[serde(default = "defaults::context_radius")]
    pub context_radius: usize,

    /// Length of the excerpt used when nothing matches
    #[serde(default = "defaults::preview_length")]
    pub preview_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::page_size(),
            context_radius: defaults::context_radius(),
            preview_length: defaults::preview_length(),
        }
    }
}

/// Artifact file names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Raw full-article archive
    #[serde(default = "defaults::articles_file")]
    pub articles_file: String,

    /// Trimmed search index
    #[serde(default = "defaults::index_file")]
    pub index_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            articles_file: defaults::articles_file(),
            index_file: defaults::index_file(),
        }
    }
}

mod defaults {
    // Fetch defaults
    pub fn base_url() -> String {
        "https://feedback.minecraft.net/api/v2/help_center/en-us/articles.json".into()
    }
    pub fn per_page() -> u32 {
        100
    }
    pub fn page_delay() -> u64 {
        200
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; article-search/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Search defaults
    pub fn page_size() -> usize {
        20
    }
    pub fn context_radius() -> usize {
        50
    }
    pub fn preview_length() -> usize {
        200
    }

    // Path defaults
    pub fn articles_file() -> String {
        "articles.json".into()
    }
    pub fn index_file() -> String {
        "search-index.json".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.fetch.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.search.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparsable_base_url() {
        let mut config = Config::default();
        config.fetch.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::Url(_))));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            page_size = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.search.page_size, 10);
        assert_eq!(config.search.context_radius, 50);
        assert_eq!(config.fetch.per_page, 100);
        assert_eq!(config.paths.index_file, "search-index.json");
    }

    #[test]
    fn load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.search.page_size, 20);
    }
}
