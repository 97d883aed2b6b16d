use crate::error::{RecompressError, Result};
use std::fs;
use std::path::Path;

/// What the command line target points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// Decides between single-file and directory mode.
///
/// Symlinks are followed. Anything that exists and is not a directory is
/// treated as a file and left for the decoder to accept or reject.
///
/// # Example
/// ```
/// use std::path::Path;
/// use imgcmp::classify_target;
///
/// let result = classify_target(Path::new("does/not/exist.png"));
/// assert!(result.is_err());
/// ```
pub fn classify_target(path: &Path) -> Result<TargetKind> {
    let metadata =
        fs::metadata(path).map_err(|_| RecompressError::InvalidTarget(path.to_path_buf()))?;

    if metadata.is_dir() {
        Ok(TargetKind::Directory)
    } else {
        Ok(TargetKind::File)
    }
}
