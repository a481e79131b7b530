//! Error types for resolving and reading the document tree

use std::fmt;
use std::io;

/// Result type for library operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur while resolving or rendering a document path
#[derive(Debug)]
pub enum LibraryError {
    /// The virtual path does not resolve to a renderable node
    NotFound,
    /// The virtual path contains a segment that could escape the book root
    InvalidPath(String),
    /// A node exists but could not be read
    Io(io::Error),
}

impl LibraryError {
    /// True for outcomes that should be reported as "page not found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound | LibraryError::InvalidPath(_))
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound => write!(f, "Book or folder not found"),
            LibraryError::InvalidPath(reason) => write!(f, "Invalid path: {}", reason),
            LibraryError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibraryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LibraryError {
    fn from(e: io::Error) -> Self {
        LibraryError::Io(e)
    }
}
