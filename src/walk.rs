use crate::constants::ALLOWED_EXTENSIONS;
use crate::error::RecompressError;
use crate::{diagnostic, verbose};
use std::ffi::OsString;
use std::fs::FileType;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices and the like.
    Other,
    /// Type metadata could not be read.
    Unknown,
}

impl EntryKind {
    fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

#[derive(Debug)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Why the entry is `Unknown`.
    pub error: Option<RecompressError>,
}

/// Recursive enumeration of everything below a root directory.
///
/// Yields files and directories alike, tagged with their kind. The root is
/// not yielded and symlinks are not followed. Entries come back lazily in
/// whatever order the filesystem reports them.
pub struct TreeWalker {
    root: PathBuf,
    inner: walkdir::IntoIter,
}

impl TreeWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            inner: WalkDir::new(root).min_depth(1).into_iter(),
        }
    }
}

impl Iterator for TreeWalker {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| resolve_full_path(&self.root, p))
                    .unwrap_or_else(|| self.root.clone());
                return Some(WalkEntry {
                    path,
                    kind: EntryKind::Unknown,
                    error: Some(err.into()),
                });
            }
        };

        let path = resolve_full_path(&self.root, entry.path());
        Some(match entry.metadata() {
            Ok(metadata) => WalkEntry {
                path,
                kind: EntryKind::from_file_type(metadata.file_type()),
                error: None,
            },
            Err(err) => WalkEntry {
                path,
                kind: EntryKind::Unknown,
                error: Some(err.into()),
            },
        })
    }
}

pub fn walk_entries(root: &Path) -> TreeWalker {
    TreeWalker::new(root)
}

/// Builds `root + "/" + relative` by plain concatenation, so a root given
/// with a trailing slash produces a doubled separator.
fn resolve_full_path(root: &Path, entry_path: &Path) -> PathBuf {
    match entry_path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => {
            let mut full = OsString::from(root.as_os_str());
            full.push("/");
            full.push(relative.as_os_str());
            PathBuf::from(full)
        }
        _ => entry_path.to_path_buf(),
    }
}

/// Case-sensitive suffix test on the whole path, not just the file name.
pub fn is_allowed_file(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    ALLOWED_EXTENSIONS
        .iter()
        .any(|ext| bytes.ends_with(ext.as_bytes()))
}

/// Walks `root` and returns the regular files the converter should handle.
///
/// The list is gathered before any conversion starts, so files written
/// during the run are never picked up as inputs.
pub fn collect_candidates(root: &Path) -> Vec<PathBuf> {
    select_candidates(walk_entries(root))
}

/// Keeps regular files with an allowed suffix. Entries whose metadata could
/// not be read are reported and skipped.
pub fn select_candidates<I>(entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = WalkEntry>,
{
    let mut candidates = Vec::new();

    for entry in entries {
        match entry.kind {
            EntryKind::Unknown => {
                diagnostic!(
                    "Error: Could not access attributes of \"{}\".",
                    entry.path.display()
                );
                if let Some(err) = &entry.error {
                    verbose!("{}", err);
                }
                continue;
            }
            EntryKind::File => {}
            EntryKind::Directory | EntryKind::Other => continue,
        }

        if is_allowed_file(&entry.path) {
            candidates.push(entry.path);
        }
    }

    candidates
}
