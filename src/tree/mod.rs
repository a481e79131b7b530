//! Read-only access to the books directory tree.
//!
//! Every component that touches documents goes through [`DocumentTree`], so the
//! resolver and the search engine can run against the real filesystem
//! ([`FsTree`]) or an in-memory fixture ([`MemoryTree`]).
//!
//! All paths handed to a tree are relative to its root. The empty path names
//! the root itself.

pub mod fs;
pub mod memory;
pub mod path;

pub use fs::FsTree;
pub use memory::MemoryTree;
pub use path::DocumentPath;

use std::io;
use std::path::{Path, PathBuf};

/// Extension of renderable documents
pub const MARKDOWN_EXTENSION: &str = "md";

/// Kind of an entry in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Read-only view over a tree of books
pub trait DocumentTree: Send + Sync {
    /// Kind of the entry at `path`, or `None` if nothing exists there
    fn entry_kind(&self, path: &Path) -> Option<EntryKind>;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// List the immediate children of a directory (unordered)
    fn read_dir(&self, path: &Path) -> io::Result<Vec<TreeEntry>>;

    /// Every regular file in the tree, depth-first with siblings sorted by name
    fn walk_files(&self) -> Vec<PathBuf>;
}

/// Check whether a path carries the markdown extension
pub fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}
