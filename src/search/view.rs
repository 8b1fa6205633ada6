//! View-models handed to the renderer.

use serde::Serialize;

use crate::models::Article;
use crate::search::excerpt::{Excerpter, Segment};
use crate::search::highlight::highlight;
use crate::search::paginate::Pagination;
use crate::search::state::SearchState;
use crate::utils::{escape_html, html_to_text};

/// Shown in place of results when nothing matched.
pub const NO_RESULTS_MESSAGE: &str = "No articles found matching your search.";

/// One rendered search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub title_markup: String,
    pub excerpt_markup: String,
    pub url: String,
}

impl ArticleView {
    /// Excerpt and highlight a single article for `terms`.
    ///
    /// Only text taken from the article is highlighted; the excerpt's
    /// omission markers are never marked, even for a query like `.`.
    pub fn build<S: AsRef<str>>(article: &Article, terms: &[S], excerpter: &Excerpter) -> Self {
        let text = html_to_text(&article.body);
        let excerpt_markup = excerpter
            .segments(&text, terms)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => highlight(text, terms),
                Segment::Marker(marker) => escape_html(marker),
            })
            .collect();

        Self {
            title_markup: highlight(&article.title, terms),
            excerpt_markup,
            url: escape_html(&article.url),
        }
    }
}

/// Everything the renderer needs for the current page.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsPage {
    pub result_count_text: String,
    /// Set instead of `articles` when the result list is empty.
    pub empty_message: Option<&'static str>,
    pub articles: Vec<ArticleView>,
    pub pagination: Pagination,
}

impl ResultsPage {
    /// Build the view of `state`'s current page.
    pub fn build(state: &SearchState<'_>, excerpter: &Excerpter) -> Self {
        let terms = state.terms();
        let articles: Vec<ArticleView> = state
            .page_items()
            .iter()
            .map(|article| ArticleView::build(article, &terms, excerpter))
            .collect();

        Self {
            result_count_text: result_count_text(state.total()),
            empty_message: (state.total() == 0).then_some(NO_RESULTS_MESSAGE),
            articles,
            pagination: state.pagination(),
        }
    }
}

/// "1 article found", "3 articles found".
pub fn result_count_text(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} article{plural} found")
}
