//! Query, filter, sort, excerpt, highlight and paginate pipeline.
//!
//! - `filter`: query containment and title exclusion rules
//! - `sort`: date-based ordering
//! - `excerpt`: context windows around matches
//! - `highlight`: `<mark>` wrapping of matched terms
//! - `paginate`: page slicing and page-control windows
//! - `state` / `view`: interaction state and renderer view-models

pub mod excerpt;
pub mod filter;
pub mod highlight;
pub mod index;
pub mod paginate;
pub mod sort;
pub mod state;
pub mod view;

pub use excerpt::{Excerpter, Segment, extract_context};
pub use filter::filter;
pub use highlight::highlight;
pub use index::{ArticleIndex, LoadReport};
pub use paginate::{PageControl, Pagination, paginate};
pub use sort::sort;
pub use state::{SearchRequest, SearchState};
pub use view::{ArticleView, ResultsPage, result_count_text};
