//! Path resolution and page rendering.
//!
//! A request path is validated into a [`DocumentPath`], resolved to a
//! [`DocumentNode`], and rendered into a [`RenderedPage`]:
//!
//! - [`resolve`] - tree lookup with `.md` suffix fallback
//! - [`select`] - directory body priority and volume/chapter listings
//! - [`title`] - breadcrumb titles
//! - [`markdown`] - the markdown converter

pub mod markdown;
pub mod resolve;
pub mod select;
pub mod title;

pub use markdown::{CmarkConverter, MarkdownConverter};
pub use resolve::{DocumentNode, resolve};
pub use select::{DirectoryListing, list_directory, select_body};
pub use title::build_title;

use crate::error::{LibraryError, LibraryResult};
use crate::tree::{DocumentPath, DocumentTree};
use serde::Serialize;

/// What kind of node a page was rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    File,
    Directory,
}

/// A rendered document or directory page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    pub title: String,
    /// HTML body
    pub body: String,
    pub kind: PageKind,
    pub book: String,
    pub subpath: Option<String>,
    /// Child directories (directories only)
    pub volumes: Vec<String>,
    /// Markdown documents in the directory (directories only)
    pub chapters: Vec<String>,
}

/// Resolve `path` and render it
pub fn render_page(
    tree: &(impl DocumentTree + ?Sized),
    converter: &dyn MarkdownConverter,
    path: &DocumentPath,
) -> LibraryResult<RenderedPage> {
    let subpath = path.subpath_str();
    let title = build_title(path.book(), subpath.as_deref());

    let (kind, body, listing) = match resolve(tree, path) {
        DocumentNode::Markdown(file) => {
            let source = tree.read_to_string(&file)?;
            (PageKind::File, converter.to_html(&source), DirectoryListing::default())
        }
        DocumentNode::Directory(dir) => {
            let body = select_body(tree, converter, &dir)?;
            let listing = list_directory(tree, &dir)?;
            (PageKind::Directory, body, listing)
        }
        DocumentNode::OtherFile(file) => {
            tracing::debug!("refusing to render {}", file.display());
            return Err(LibraryError::NotFound);
        }
        DocumentNode::Missing => return Err(LibraryError::NotFound),
    };

    Ok(RenderedPage {
        title,
        body,
        kind,
        book: path.book().to_string(),
        subpath,
        volumes: listing.volumes,
        chapters: listing.chapters,
    })
}
