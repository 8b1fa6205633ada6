//! Search interaction state.
//!
//! A [`SearchState`] is a value: running a new search or moving to another
//! page returns a fresh state and leaves the previous one untouched.

use crate::models::{Article, ExclusionRules, SortStrategy};
use crate::search::index::ArticleIndex;
use crate::search::paginate::{self, DEFAULT_PAGE_SIZE, Pagination};
use crate::search::{filter, sort};
use crate::utils::{normalize_query, query_terms};

/// Inputs of a full search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw user input; normalized before use.
    pub query: String,
    pub rules: ExclusionRules,
    pub sort: SortStrategy,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_rules(mut self, rules: ExclusionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }
}

/// Result list and position produced by the last full search.
#[derive(Debug, Clone)]
pub struct SearchState<'a> {
    query: String,
    rules: ExclusionRules,
    sort: SortStrategy,
    page_size: usize,
    current_page: usize,
    results: Vec<&'a Article>,
}

impl<'a> SearchState<'a> {
    /// Filter and sort `index` for `request`, starting on page 1.
    pub fn search(index: &'a ArticleIndex, request: &SearchRequest, page_size: usize) -> Self {
        let query = normalize_query(&request.query);
        let filtered = filter::filter(index.articles(), &query, &request.rules);
        let results = sort::sort(&filtered, request.sort);

        log::debug!(
            "Search '{}' ({}, {:?}) matched {} of {} articles",
            query,
            request.sort,
            request.rules,
            results.len(),
            index.len()
        );

        Self {
            query,
            rules: request.rules,
            sort: request.sort,
            page_size: page_size.max(1),
            current_page: 1,
            results,
        }
    }

    /// Search with the default page size.
    pub fn with_defaults(index: &'a ArticleIndex, request: &SearchRequest) -> Self {
        Self::search(index, request, DEFAULT_PAGE_SIZE)
    }

    /// Re-run the search if any input changed, otherwise keep this state.
    ///
    /// A changed query, rule set or strategy always lands on page 1.
    pub fn refine(&self, index: &'a ArticleIndex, request: &SearchRequest) -> Self {
        let unchanged = normalize_query(&request.query) == self.query
            && request.rules == self.rules
            && request.sort == self.sort;
        if unchanged {
            self.clone()
        } else {
            Self::search(index, request, self.page_size)
        }
    }

    /// Move to `page` without re-filtering.
    ///
    /// Returns `None` for page 0 or a page past the last one.
    pub fn go_to_page(&self, page: usize) -> Option<Self> {
        if page == 0 || page > self.page_count() {
            log::debug!(
                "Ignoring request for page {} of {}",
                page,
                self.page_count()
            );
            return None;
        }
        Some(Self {
            current_page: page,
            ..self.clone()
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Highlight terms derived from the query.
    pub fn terms(&self) -> Vec<String> {
        query_terms(&self.query)
    }

    pub fn rules(&self) -> ExclusionRules {
        self.rules
    }

    pub fn sort(&self) -> SortStrategy {
        self.sort
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn results(&self) -> &[&'a Article] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn page_count(&self) -> usize {
        paginate::page_count(self.results.len(), self.page_size)
    }

    /// Articles on the current page.
    pub fn page_items(&self) -> &[&'a Article] {
        paginate::page_slice(&self.results, self.page_size, self.current_page)
    }

    pub fn pagination(&self) -> Pagination {
        paginate::paginate(self.results.len(), self.page_size, self.current_page)
    }
}
