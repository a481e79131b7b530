use super::snippet::build_snippet;
use crate::tree::{DocumentTree, is_markdown};
use rayon::prelude::*;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// A single matching document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Path relative to the tree root, `/`-separated
    pub relative_path: String,
    /// Navigable page URL for the document
    pub url: String,
    pub book: String,
    /// File name of the document without its extension
    pub volume: String,
    /// HTML-escaped context around the first match
    pub snippet: String,
}

/// Options for a search run
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Scan files on the rayon pool instead of sequentially
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Case-insensitive literal matcher for a user query
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    regex: Regex,
}

impl QueryMatcher {
    /// Build a matcher, or `None` for a blank query.
    ///
    /// The query is matched as literal text; regex syntax has no effect.
    pub fn new(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => Some(Self { regex }),
            Err(e) => {
                tracing::warn!("unusable search query: {}", e);
                None
            }
        }
    }

    /// Byte offset of the first match in `content`
    pub fn find(&self, content: &str) -> Option<usize> {
        self.regex.find(content).map(|m| m.start())
    }
}

/// Where a matched document lives, split into the parts a result needs
#[derive(Debug, Clone, PartialEq, Eq)]
struct DocumentLocation {
    book: String,
    /// Segments below the book; the last one has its extension stripped
    rest: Vec<String>,
    relative_path: String,
}

impl DocumentLocation {
    /// `None` for documents sitting directly at the root (they belong to no
    /// book) and for paths that are not plain UTF-8 names
    fn from_relative(path: &Path) -> Option<Self> {
        let segments = path
            .components()
            .map(|c| match c {
                Component::Normal(name) => name.to_str(),
                _ => None,
            })
            .collect::<Option<Vec<&str>>>()?;

        let (book, rest) = segments.split_first()?;
        let (last, dirs) = rest.split_last()?;
        let volume = Path::new(last).file_stem()?.to_str()?;

        let mut rest: Vec<String> = dirs.iter().map(|s| s.to_string()).collect();
        rest.push(volume.to_string());

        Some(Self {
            book: book.to_string(),
            rest,
            relative_path: segments.join("/"),
        })
    }

    fn volume(&self) -> &str {
        self.rest.last().map_or("", String::as_str)
    }

    /// `/book/{book}/{volume}/` for documents directly in the book,
    /// `/book/{book}/{dirs...}/{volume}/` for nested ones
    fn url(&self) -> String {
        format!("/book/{}/{}/", self.book, self.rest.join("/"))
    }
}

/// Search every markdown document in the tree for `query`.
///
/// Results come back in walk order with at most one result per document.
/// A blank query returns nothing. Documents that can't be read as UTF-8 are
/// skipped.
pub fn search(
    tree: &(impl DocumentTree + ?Sized),
    query: &str,
    options: SearchOptions,
) -> Vec<SearchResult> {
    let Some(matcher) = QueryMatcher::new(query) else {
        return Vec::new();
    };

    let files: Vec<PathBuf> = tree
        .walk_files()
        .into_iter()
        .filter(|path| is_markdown(path))
        .collect();

    // Ordered collect keeps walk order even when scanning in parallel
    let results: Vec<SearchResult> = if options.parallel {
        files
            .par_iter()
            .filter_map(|path| scan_document(tree, &matcher, path))
            .collect()
    } else {
        files
            .iter()
            .filter_map(|path| scan_document(tree, &matcher, path))
            .collect()
    };

    tracing::debug!(
        "search {:?}: {} matches in {} documents",
        query,
        results.len(),
        files.len()
    );
    results
}

fn scan_document(
    tree: &(impl DocumentTree + ?Sized),
    matcher: &QueryMatcher,
    path: &Path,
) -> Option<SearchResult> {
    let location = DocumentLocation::from_relative(path)?;

    let content = match tree.read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("skipping {}: {}", path.display(), e);
            return None;
        }
    };

    let match_start = matcher.find(&content)?;

    Some(SearchResult {
        url: location.url(),
        volume: location.volume().to_string(),
        snippet: build_snippet(&content, match_start),
        book: location.book,
        relative_path: location.relative_path,
    })
}
