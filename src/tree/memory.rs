//! In-memory document tree for fixtures and tests

use super::{DocumentTree, EntryKind, TreeEntry};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum MemoryEntry {
    File(Vec<u8>),
    Directory,
}

/// A document tree held entirely in memory.
///
/// Parent directories are created implicitly when a file is inserted.
/// Entries are kept in a `BTreeMap` keyed by path, whose component-wise
/// ordering is exactly the depth-first, name-sorted walk order of [`super::FsTree`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    entries: BTreeMap<PathBuf, MemoryEntry>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemoryTree::insert_file`]
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        self.insert_file(path, content);
        self
    }

    /// Builder-style [`MemoryTree::insert_dir`]
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_dir(path);
        self
    }

    /// Add (or replace) a file along with its parent directories
    pub fn insert_file(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        self.insert_parents(path);
        self.entries
            .insert(path.to_path_buf(), MemoryEntry::File(content.into()));
    }

    /// Add an empty directory along with its parents
    pub fn insert_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.insert_parents(path);
        self.entries
            .entry(path.to_path_buf())
            .or_insert(MemoryEntry::Directory);
    }

    fn insert_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.entries
                .entry(ancestor.to_path_buf())
                .or_insert(MemoryEntry::Directory);
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such entry: {}", path.display()),
    )
}

impl DocumentTree for MemoryTree {
    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        if path.as_os_str().is_empty() {
            return Some(EntryKind::Directory);
        }
        match self.entries.get(path)? {
            MemoryEntry::File(_) => Some(EntryKind::File),
            MemoryEntry::Directory => Some(EntryKind::Directory),
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.entries.get(path) {
            Some(MemoryEntry::File(bytes)) => String::from_utf8(bytes.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Some(MemoryEntry::Directory) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<TreeEntry>> {
        if self.entry_kind(path) != Some(EntryKind::Directory) {
            return Err(not_found(path));
        }

        let entries = self
            .entries
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, entry)| {
                let name = child.file_name()?.to_str()?.to_string();
                let kind = match entry {
                    MemoryEntry::File(_) => EntryKind::File,
                    MemoryEntry::Directory => EntryKind::Directory,
                };
                Some(TreeEntry { name, kind })
            })
            .collect();

        Ok(entries)
    }

    fn walk_files(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, MemoryEntry::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_are_created() {
        let tree = MemoryTree::new().with_file("book/volume/chapter.md", "text");

        assert_eq!(tree.entry_kind(Path::new("book")), Some(EntryKind::Directory));
        assert_eq!(tree.entry_kind(Path::new("book/volume")), Some(EntryKind::Directory));
        assert_eq!(
            tree.entry_kind(Path::new("book/volume/chapter.md")),
            Some(EntryKind::File)
        );
    }

    #[test]
    fn test_read_dir_root() {
        let tree = MemoryTree::new()
            .with_file("alpha/a.md", "a")
            .with_dir("beta")
            .with_file("loose.md", "x");

        let root = tree.read_dir(Path::new("")).unwrap();
        let names: Vec<_> = root.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "loose.md"]);
    }

    #[test]
    fn test_read_dir_on_file_fails() {
        let tree = MemoryTree::new().with_file("book/a.md", "a");
        assert!(tree.read_dir(Path::new("book/a.md")).is_err());
        assert!(tree.read_dir(Path::new("nope")).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let tree = MemoryTree::new().with_file("book/bin.md", vec![0xff, 0xfe, 0x00]);
        let err = tree.read_to_string(Path::new("book/bin.md")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_walk_order_is_depth_first() {
        let tree = MemoryTree::new()
            .with_file("book/volume.md", "2")
            .with_file("book/volume/inner.md", "1")
            .with_file("book/README.md", "0");

        assert_eq!(
            tree.walk_files(),
            vec![
                PathBuf::from("book/README.md"),
                PathBuf::from("book/volume/inner.md"),
                PathBuf::from("book/volume.md"),
            ]
        );
    }
}
