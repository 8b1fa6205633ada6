//! Search option types shared by the pipeline and its callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Date-based result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortStrategy {
    /// Keep index order
    #[default]
    Relevance,
    /// Descending by creation time
    Newest,
    /// Ascending by creation time
    Oldest,
    /// Descending by update time
    RecentlyUpdated,
    /// Descending by edit time, creation time when never edited
    RecentlyEdited,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Relevance => "relevance",
            SortStrategy::Newest => "newest",
            SortStrategy::Oldest => "oldest",
            SortStrategy::RecentlyUpdated => "recentlyUpdated",
            SortStrategy::RecentlyEdited => "recentlyEdited",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "" | "relevance" => Ok(SortStrategy::Relevance),
            "newest" => Ok(SortStrategy::Newest),
            "oldest" => Ok(SortStrategy::Oldest),
            "recentlyupdated" => Ok(SortStrategy::RecentlyUpdated),
            "recentlyedited" => Ok(SortStrategy::RecentlyEdited),
            other => Err(AppError::validation(format!(
                "unknown sort strategy '{other}'"
            ))),
        }
    }
}

/// Title-based exclusion toggles. Each enabled rule must pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExclusionRules {
    /// Drop titles containing "preview" or "beta"
    #[serde(default)]
    pub exclude_preview: bool,

    /// Drop titles containing "java"
    #[serde(default)]
    pub exclude_java: bool,

    /// Drop titles containing "preview", "bedrock" or "beta"
    #[serde(default)]
    pub exclude_bedrock: bool,
}

impl ExclusionRules {
    /// Rules with nothing enabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every rule enabled.
    pub fn all() -> Self {
        Self {
            exclude_preview: true,
            exclude_java: true,
            exclude_bedrock: true,
        }
    }

    /// Whether a title passes every enabled rule.
    pub fn allows(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        let hit = |words: &[&str]| words.iter().any(|w| title.contains(w));

        if self.exclude_preview && hit(&["preview", "beta"]) {
            return false;
        }
        if self.exclude_java && hit(&["java"]) {
            return false;
        }
        if self.exclude_bedrock && hit(&["preview", "bedrock", "beta"]) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_strategy_from_str() {
        assert_eq!("newest".parse::<SortStrategy>().unwrap(), SortStrategy::Newest);
        assert_eq!(
            "recentlyUpdated".parse::<SortStrategy>().unwrap(),
            SortStrategy::RecentlyUpdated
        );
        assert_eq!(
            "recently-edited".parse::<SortStrategy>().unwrap(),
            SortStrategy::RecentlyEdited
        );
        assert_eq!("".parse::<SortStrategy>().unwrap(), SortStrategy::Relevance);
        assert!("alphabetical".parse::<SortStrategy>().is_err());
    }

    #[test]
    fn test_sort_strategy_display_round_trips() {
        for strategy in [
            SortStrategy::Relevance,
            SortStrategy::Newest,
            SortStrategy::Oldest,
            SortStrategy::RecentlyUpdated,
            SortStrategy::RecentlyEdited,
        ] {
            assert_eq!(strategy.to_string().parse::<SortStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_exclusion_rules() {
        let none = ExclusionRules::none();
        assert!(none.allows("Java Edition Beta 1.2"));

        let preview = ExclusionRules {
            exclude_preview: true,
            ..ExclusionRules::default()
        };
        assert!(!preview.allows("Minecraft Preview 1.20"));
        assert!(!preview.allows("Java Edition BETA"));
        assert!(preview.allows("Bedrock Edition 1.20"));

        let java = ExclusionRules {
            exclude_java: true,
            ..ExclusionRules::default()
        };
        assert!(!java.allows("JAVA Edition 1.20"));
        assert!(java.allows("Bedrock Edition 1.20"));

        let bedrock = ExclusionRules {
            exclude_bedrock: true,
            ..ExclusionRules::default()
        };
        assert!(!bedrock.allows("Bedrock Edition 1.20"));
        assert!(!bedrock.allows("Minecraft Preview"));
        assert!(bedrock.allows("Java Edition 1.20"));
    }
}
