//! Directory pages: descriptive body and child listings

use super::markdown::MarkdownConverter;
use crate::error::LibraryResult;
use crate::tree::{DocumentTree, EntryKind, is_markdown};
use std::path::Path;

/// Pre-rendered HTML index, served verbatim
pub const FOLDER_INDEX: &str = "folder_index.html";
pub const README: &str = "README.md";
pub const INDEX_MD: &str = "index.md";

/// Body used when a directory has no index source
pub const NO_DESCRIPTION: &str = "<p>No description available.</p>";

/// Child directories and chapter documents of a directory, both sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub volumes: Vec<String>,
    pub chapters: Vec<String>,
}

/// Pick the body of a directory page.
///
/// `folder_index.html` wins over `README.md`, which wins over `index.md`.
/// The HTML index is operator-authored and passed through untouched.
pub fn select_body(
    tree: &(impl DocumentTree + ?Sized),
    converter: &dyn MarkdownConverter,
    dir: &Path,
) -> LibraryResult<String> {
    let folder_index = dir.join(FOLDER_INDEX);
    if tree.entry_kind(&folder_index) == Some(EntryKind::File) {
        return Ok(tree.read_to_string(&folder_index)?);
    }

    for name in [README, INDEX_MD] {
        let candidate = dir.join(name);
        if tree.entry_kind(&candidate) == Some(EntryKind::File) {
            let source = tree.read_to_string(&candidate)?;
            return Ok(converter.to_html(&source));
        }
    }

    Ok(NO_DESCRIPTION.to_string())
}

/// List the volumes (subdirectories) and chapters (markdown documents other
/// than `README.md`/`index.md`) directly inside `dir`
pub fn list_directory(
    tree: &(impl DocumentTree + ?Sized),
    dir: &Path,
) -> LibraryResult<DirectoryListing> {
    let mut listing = DirectoryListing::default();

    for entry in tree.read_dir(dir)? {
        match entry.kind {
            EntryKind::Directory => listing.volumes.push(entry.name),
            EntryKind::File => {
                let name = Path::new(&entry.name);
                if !is_markdown(name) || entry.name == README || entry.name == INDEX_MD {
                    continue;
                }
                if let Some(stem) = name.file_stem().and_then(|s| s.to_str()) {
                    listing.chapters.push(stem.to_string());
                }
            }
        }
    }

    listing.volumes.sort();
    listing.chapters.sort();
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markdown::CmarkConverter;
    use crate::tree::MemoryTree;

    fn body(tree: &MemoryTree, dir: &str) -> String {
        select_body(tree, &CmarkConverter::default(), Path::new(dir)).unwrap()
    }

    #[test]
    fn test_folder_index_wins_and_is_raw() {
        let raw = "<div class=\"hero\"><script>init()</script></div>";
        let tree = MemoryTree::new()
            .with_file("book/folder_index.html", raw)
            .with_file("book/README.md", "# Readme")
            .with_file("book/index.md", "# Index");

        assert_eq!(body(&tree, "book"), raw);
    }

    #[test]
    fn test_readme_before_index() {
        let tree = MemoryTree::new()
            .with_file("book/README.md", "Hello World")
            .with_file("book/index.md", "Index page");

        assert_eq!(body(&tree, "book"), "<p>Hello World</p>\n");
    }

    #[test]
    fn test_index_md() {
        let tree = MemoryTree::new().with_file("book/index.md", "Index page");
        assert_eq!(body(&tree, "book"), "<p>Index page</p>\n");
    }

    #[test]
    fn test_placeholder() {
        let tree = MemoryTree::new().with_file("book/chapter.md", "text");
        assert_eq!(body(&tree, "book"), NO_DESCRIPTION);
    }

    #[test]
    fn test_directory_named_like_index_is_ignored() {
        let tree = MemoryTree::new()
            .with_dir("book/folder_index.html")
            .with_file("book/index.md", "Index page");
        assert_eq!(body(&tree, "book"), "<p>Index page</p>\n");
    }

    #[test]
    fn test_unreadable_readme_is_an_error() {
        let tree = MemoryTree::new().with_file("book/README.md", vec![0xff, 0xff]);
        assert!(select_body(&tree, &CmarkConverter::default(), Path::new("book")).is_err());
    }

    #[test]
    fn test_listing_partitions_and_sorts() {
        let tree = MemoryTree::new()
            .with_file("book/zeta.md", "z")
            .with_file("book/alpha.md", "a")
            .with_file("book/README.md", "r")
            .with_file("book/index.md", "i")
            .with_file("book/folder_index.html", "<p>x</p>")
            .with_file("book/cover.png", "png")
            .with_dir("book/volume-b")
            .with_file("book/volume-a/inner.md", "x");

        let listing = list_directory(&tree, Path::new("book")).unwrap();
        assert_eq!(listing.volumes, vec!["volume-a", "volume-b"]);
        assert_eq!(listing.chapters, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_directory() {
        let tree = MemoryTree::new().with_dir("book/empty");
        let listing = list_directory(&tree, Path::new("book/empty")).unwrap();
        assert_eq!(listing, DirectoryListing::default());
    }
}
