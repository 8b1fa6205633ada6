//! Article data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A help-center article as stored in the search index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Opaque article identifier
    pub id: Value,

    /// Plain text title
    pub title: String,

    /// Plain text summary
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// HTML body
    pub body: String,

    /// Absolute link to the article page
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Section the article belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<Value>,

    /// Creation time (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    /// Last update time (ISO 8601)
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,

    /// Last edit time (ISO 8601), absent if never edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<String>,
}

impl Article {
    /// Creation instant, `None` if the timestamp is malformed.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Update instant, `None` if the timestamp is malformed.
    pub fn updated(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }

    /// Edit instant, falling back to the creation instant when never edited.
    pub fn edited(&self) -> Option<DateTime<Utc>> {
        match &self.edited_at {
            Some(edited) => parse_timestamp(edited),
            None => self.created(),
        }
    }
}

/// Read an explicit JSON `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse an ISO 8601 timestamp into a UTC instant.
///
/// Accepts RFC 3339 with offset (`2024-01-05T10:00:00Z`) and a bare
/// `YYYY-MM-DDTHH:MM:SS` form, which is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// An article as returned by the help-center API.
///
/// Only the fields needed for the search index are typed; the rest are kept
/// so the raw archive round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub id: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default)]
    pub section_id: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl From<&RawArticle> for Article {
    fn from(raw: &RawArticle) -> Self {
        let description = raw
            .extra
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            id: raw.id.clone(),
            title: raw.title.clone(),
            description,
            body: raw.body.clone(),
            url: raw.html_url.clone(),
            section_id: raw.section_id.clone(),
            created_at: raw.created_at.clone(),
            updated_at: raw.updated_at.clone(),
            edited_at: raw.edited_at.clone(),
        }
    }
}

/// One page of the help-center articles endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticlePage {
    #[serde(default)]
    pub articles: Vec<RawArticle>,
    #[serde(default)]
    pub next_page: Option<String>,
}
