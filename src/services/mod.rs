//! Service layer for the article search application.
//!
//! This module contains the network-facing logic for:
//! - Article fetching from the help-center API (`ArticleFetcher`)

mod articles;

pub use articles::{ArticleFetcher, FetchOutcome};
