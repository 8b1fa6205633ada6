//! Query and exclusion-rule filtering.

use crate::models::{Article, ExclusionRules};

/// Whether an article's searchable text contains `query`.
///
/// `query` must already be normalized (trimmed, lower-cased). The body is
/// searched verbatim, markup included.
pub fn matches_query(article: &Article, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let searchable = format!(
        "{} {} {}",
        article.title, article.description, article.body
    )
    .to_lowercase();
    searchable.contains(query)
}

/// Keep the articles matching `query` and passing every enabled rule.
///
/// Relative order of `articles` is preserved.
pub fn filter<'a, I>(articles: I, query: &str, rules: &ExclusionRules) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles
        .into_iter()
        .filter(|article| matches_query(article, query))
        .filter(|article| rules.allows(&article.title))
        .collect()
}
