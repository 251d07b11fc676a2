//! Core types for path handling.

use std::path::{Path, PathBuf};

use super::normalize::parent_posix;

/// A user-supplied path that has been resolved inside the root.
///
/// A `ResolvedPath` can only be produced by
/// [`PathResolver`](super::PathResolver), so holding one means the path
/// existed and was confined to the root at the time it was resolved.
///
/// # Examples
///
/// ```no_run
/// use fileweb::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
/// let resolved = resolver.resolve("imgs/./a.png").unwrap();
///
/// assert_eq!(resolved.original(), "imgs/./a.png");
/// assert_eq!(resolved.relative(), "imgs/a.png");
/// assert_eq!(resolved.parent_relative().as_deref(), Some("imgs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    path: PathBuf,
    original: String,
    relative: String,
}

impl ResolvedPath {
    pub(crate) fn new(path: PathBuf, original: impl Into<String>, relative: String) -> Self {
        Self {
            path,
            original: original.into(),
            relative,
        }
    }

    /// The canonical absolute path on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The string exactly as the caller supplied it.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The root-relative path with `/` separators (`""` for the root).
    #[must_use]
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Whether this is the root directory itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.relative.is_empty()
    }

    /// Whether the path currently refers to a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// Whether the path currently refers to a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    /// The final component of the on-disk path.
    ///
    /// For the root this is the root directory's own name.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// The root-relative path of the parent directory.
    ///
    /// `None` for the root, `Some("")` when the parent is the root.
    #[must_use]
    pub fn parent_relative(&self) -> Option<String> {
        parent_posix(&self.relative)
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
