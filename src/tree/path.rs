//! Virtual document paths (`book[/segment...]`) and their validation

use crate::error::{LibraryError, LibraryResult};
use std::path::{Component, Path, PathBuf};

/// A validated virtual path: a book name plus zero or more sub-path segments.
///
/// Construction rejects anything that could escape the book root, so a
/// `DocumentPath` can always be joined onto a tree root safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    book: String,
    subpath: Vec<String>,
}

impl DocumentPath {
    /// Build a path from the router's `(book, subpath)` split.
    ///
    /// A single trailing `/` on the subpath is ignored; an empty subpath means
    /// the book's own root directory.
    pub fn new(book: &str, subpath: Option<&str>) -> LibraryResult<Self> {
        validate_segment(book)?;

        let subpath = match subpath.map(|s| s.strip_suffix('/').unwrap_or(s)) {
            None | Some("") => Vec::new(),
            Some(s) => s
                .split('/')
                .map(|segment| validate_segment(segment).map(|_| segment.to_string()))
                .collect::<LibraryResult<Vec<_>>>()?,
        };

        Ok(Self {
            book: book.to_string(),
            subpath,
        })
    }

    /// Parse a full virtual path such as `book-one/volume/chapter/`
    pub fn parse(virtual_path: &str) -> LibraryResult<Self> {
        let trimmed = virtual_path.strip_suffix('/').unwrap_or(virtual_path);
        match trimmed.split_once('/') {
            Some((book, rest)) => Self::new(book, Some(rest)),
            None => Self::new(trimmed, None),
        }
    }

    pub fn book(&self) -> &str {
        &self.book
    }

    pub fn subpath(&self) -> &[String] {
        &self.subpath
    }

    /// Sub-path segments joined with `/`, if any
    pub fn subpath_str(&self) -> Option<String> {
        if self.subpath.is_empty() {
            None
        } else {
            Some(self.subpath.join("/"))
        }
    }

    /// Path of the node relative to the tree root
    pub fn to_relative_path(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.book);
        path.extend(&self.subpath);
        path
    }
}

fn validate_segment(segment: &str) -> LibraryResult<()> {
    if segment.is_empty() {
        return Err(LibraryError::InvalidPath("empty path segment".into()));
    }
    if segment.contains(['\\', '\0']) {
        return Err(LibraryError::InvalidPath(format!(
            "illegal character in segment {:?}",
            segment
        )));
    }

    // Anything other than a single plain component ("..", ".", "C:") is an escape
    let mut components = Path::new(segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(LibraryError::InvalidPath(format!(
            "segment {:?} is not a plain name",
            segment
        ))),
    }
}
