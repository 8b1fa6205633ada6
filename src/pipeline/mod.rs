//! Pipeline entry points for article search operations.
//!
//! - `run_fetch`: Download every article and write the archive and index
//! - `run_search`: Search a stored index and build one page of results

pub mod fetch;
pub mod query;

pub use fetch::{build_search_index, run_fetch};
pub use query::run_search;
