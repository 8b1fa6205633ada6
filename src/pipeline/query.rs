// src/pipeline/query.rs

//! Search pipeline over a stored index.

use crate::error::Result;
use crate::models::Config;
use crate::search::{Excerpter, ResultsPage, SearchRequest, SearchState};
use crate::storage::ArticleStorage;

/// Load the index, run `request` and build the view of `page`.
///
/// A page outside the result range is ignored and page 1 is shown instead.
pub async fn run_search(
    config: &Config,
    storage: &dyn ArticleStorage,
    request: &SearchRequest,
    page: usize,
) -> Result<ResultsPage> {
    let (index, _report) = storage.load_index().await?;

    let state = SearchState::search(&index, request, config.search.page_size);
    let state = if page == 1 {
        state
    } else {
        match state.go_to_page(page) {
            Some(moved) => moved,
            None => {
                log::warn!(
                    "Page {} is out of range (1..={}), showing page 1",
                    page,
                    state.page_count()
                );
                state
            }
        }
    };

    let excerpter = Excerpter::from_config(&config.search);
    Ok(ResultsPage::build(&state, &excerpter))
}
