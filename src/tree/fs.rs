//! Filesystem-backed document tree

use super::{DocumentTree, EntryKind, TreeEntry};
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Document tree rooted at a directory on disk.
///
/// Nothing is cached: every call goes back to the filesystem so that edited
/// content shows up without a restart.
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn kind_of(metadata: &fs::Metadata) -> Option<EntryKind> {
    if metadata.is_dir() {
        Some(EntryKind::Directory)
    } else if metadata.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}

impl DocumentTree for FsTree {
    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        let metadata = fs::metadata(self.full_path(path)).ok()?;
        kind_of(&metadata)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.full_path(path))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<TreeEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(self.full_path(path))? {
            let entry = entry?;

            // Names that are not UTF-8 can't be addressed by a URL
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::debug!("skipping non UTF-8 entry {:?}", entry.path());
                continue;
            };

            // Follow symlinks; dangling links and special files are skipped
            let Some(kind) = fs::metadata(entry.path()).ok().as_ref().and_then(kind_of) else {
                continue;
            };

            entries.push(TreeEntry { name, kind });
        }

        Ok(entries)
    }

    fn walk_files(&self) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("walk error under {}: {}", self.root.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.root)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect()
    }
}
