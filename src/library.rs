//! The library facade used by the CLI and the HTTP server

use crate::error::{LibraryError, LibraryResult};
use crate::render::{CmarkConverter, MarkdownConverter, RenderedPage, render_page};
use crate::search::{SearchOptions, SearchResult, search};
use crate::tree::{DocumentPath, DocumentTree, EntryKind, FsTree};
use crate::utils::AppConfig;
use std::path::Path;

/// A tree of books plus the settings needed to render and search it
pub struct Library<T: DocumentTree = FsTree> {
    tree: T,
    converter: Box<dyn MarkdownConverter>,
    search_options: SearchOptions,
}

impl Library<FsTree> {
    /// Open the books directory named by the config
    pub fn from_config(config: &AppConfig) -> Self {
        Library::new(FsTree::new(&config.books_root))
            .with_converter(CmarkConverter::new(config.hard_breaks))
            .with_search_options(SearchOptions {
                parallel: config.parallel_search,
            })
    }
}

impl<T: DocumentTree> Library<T> {
    pub fn new(tree: T) -> Self {
        Self {
            tree,
            converter: Box::new(CmarkConverter::default()),
            search_options: SearchOptions::default(),
        }
    }

    pub fn with_converter(mut self, converter: impl MarkdownConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn with_search_options(mut self, options: SearchOptions) -> Self {
        self.search_options = options;
        self
    }

    /// Names of all books (top-level directories), sorted
    pub fn books(&self) -> LibraryResult<Vec<String>> {
        let mut books: Vec<String> = self
            .tree
            .read_dir(Path::new(""))?
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Directory)
            .map(|entry| entry.name)
            .collect();
        books.sort();
        Ok(books)
    }

    /// Render `book[/subpath]`
    pub fn render(&self, book: &str, subpath: Option<&str>) -> LibraryResult<RenderedPage> {
        let path = DocumentPath::new(book, subpath)?;
        self.render_path(&path)
    }

    pub fn render_path(&self, path: &DocumentPath) -> LibraryResult<RenderedPage> {
        render_page(&self.tree, self.converter.as_ref(), path).inspect_err(|e| {
            if let LibraryError::Io(io) = e {
                tracing::warn!("failed to render {:?}: {}", path, io);
            }
        })
    }

    /// Search all documents for `query`
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search(&self.tree, query, self.search_options)
    }
}
