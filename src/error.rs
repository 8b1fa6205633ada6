// src/error.rs

//! Unified error handling for the article search application.

use std::fmt;

use thiserror::Error;

/// Result type alias for article search operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Term pattern could not be compiled
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fetching articles from the help-center API failed
    #[error("Fetch error for {context}: {message}")]
    Fetch { context: String, message: String },

    /// The search index could not be loaded
    #[error("Index load error: {0}")]
    IndexLoad(String),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a fetch error with context.
    pub fn fetch(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create an index load error.
    pub fn index_load(message: impl fmt::Display) -> Self {
        Self::IndexLoad(message.to_string())
    }
}
