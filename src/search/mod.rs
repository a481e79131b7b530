//! Full-text search over the books tree.
//!
//! Every markdown document is scanned for the first case-insensitive
//! occurrence of the query. There is no index and no ranking: results come
//! back in walk order, one per matching document, each with a cleaned-up
//! context snippet and the URL of the document's page.
//!
//! - [`engine`] - tree walk, matching and URL reconstruction
//! - [`snippet`] - context windows, markup stripping and escaping

pub mod engine;
pub mod snippet;

pub use engine::{QueryMatcher, SearchOptions, SearchResult, search};
pub use snippet::build_snippet;
