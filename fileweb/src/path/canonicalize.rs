//! Symlink resolution against the real filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Follow every symlink in `path` and return the real location.
///
/// Missing paths map to [`Error::PathNotFound`], permission problems to
/// [`Error::PermissionDenied`]. Symlink loops and the like surface as
/// [`Error::Io`].
///
/// # Errors
///
/// Fails whenever [`fs::canonicalize`] does.
///
/// ```no_run
/// use fileweb::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// assert!(canonicalize(Path::new("/tmp")).unwrap().is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        let path = path.to_path_buf();
        match e.kind() {
            ErrorKind::NotFound => Error::PathNotFound { path },
            ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            _ => Error::Io(e),
        }
    })
}

/// Canonicalize a candidate root, requiring it to be a directory.
///
/// # Errors
///
/// Whatever [`canonicalize`] returns, or [`Error::InvalidPath`] when the
/// target exists but is not a directory.
pub fn canonical_root(path: &Path) -> Result<PathBuf> {
    let canonical = canonicalize(path)?;
    if canonical.is_dir() {
        Ok(canonical)
    } else {
        Err(Error::InvalidPath {
            path: canonical,
            reason: "not a directory".to_string(),
        })
    }
}
