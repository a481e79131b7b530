//! # bookshelf - browse and search a tree of markdown books
//!
//! A books directory holds one sub-directory per book. Books contain markdown
//! documents ("chapters") and nested directories ("volumes"). bookshelf maps
//! URL paths onto that tree, renders what it finds, and runs literal
//! full-text searches over every document.
//!
//! ## Architecture
//!
//! - [`tree`] - read-only tree access (filesystem or in-memory) and path validation
//! - [`render`] - path resolution, directory pages, titles, markdown conversion
//! - [`search`] - full-text search with context snippets
//! - [`library`] - facade tying a tree to a converter and search settings
//! - [`server`] - HTTP front end (feature `server`)
//! - [`output`] - terminal output for the CLI
//! - [`utils`] - app data directory and configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use bookshelf::library::Library;
//! use bookshelf::tree::FsTree;
//!
//! let library = Library::new(FsTree::new("books"));
//!
//! let page = library.render("book-one", Some("chapter-one")).unwrap();
//! println!("{}", page.title); // "Book One / Chapter One"
//!
//! for result in library.search("ownership") {
//!     println!("{} {}", result.url, result.snippet);
//! }
//! ```

pub mod error;
pub mod library;
pub mod output;
pub mod render;
pub mod search;
#[cfg(feature = "server")]
pub mod server;
pub mod tree;
pub mod utils;

pub use error::{LibraryError, LibraryResult};
pub use library::Library;
