//! Mapping virtual document paths onto tree nodes

use crate::tree::{DocumentPath, DocumentTree, EntryKind, MARKDOWN_EXTENSION, is_markdown};
use std::path::{Path, PathBuf};

/// Classification of a resolved path. Produced once here and consumed by
/// everything downstream, so suffix checks don't leak into the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// A markdown document
    Markdown(PathBuf),
    /// A file that exists but is not renderable
    OtherFile(PathBuf),
    Directory(PathBuf),
    Missing,
}

fn classify(tree: &(impl DocumentTree + ?Sized), path: &Path) -> DocumentNode {
    match tree.entry_kind(path) {
        Some(EntryKind::Directory) => DocumentNode::Directory(path.to_path_buf()),
        Some(EntryKind::File) if is_markdown(path) => DocumentNode::Markdown(path.to_path_buf()),
        Some(EntryKind::File) => DocumentNode::OtherFile(path.to_path_buf()),
        None => DocumentNode::Missing,
    }
}

/// Append the markdown extension without replacing an existing one
fn with_markdown_suffix(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(MARKDOWN_EXTENSION);
    PathBuf::from(name)
}

/// Resolve a document path against the tree.
///
/// A path that does not exist is retried with `.md` appended, so
/// `book/chapter` finds `book/chapter.md`. A book itself is always a
/// directory: files sitting at the root belong to no book.
pub fn resolve(tree: &(impl DocumentTree + ?Sized), path: &DocumentPath) -> DocumentNode {
    let candidate = path.to_relative_path();

    if path.subpath().is_empty() {
        return match tree.entry_kind(&candidate) {
            Some(EntryKind::Directory) => DocumentNode::Directory(candidate),
            _ => DocumentNode::Missing,
        };
    }

    match classify(tree, &candidate) {
        DocumentNode::Missing => {
            let fallback = with_markdown_suffix(&candidate);
            match tree.entry_kind(&fallback) {
                Some(EntryKind::File) => {
                    tracing::debug!("resolved {} via suffix fallback", candidate.display());
                    DocumentNode::Markdown(fallback)
                }
                _ => DocumentNode::Missing,
            }
        }
        node => node,
    }
}
