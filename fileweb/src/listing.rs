//! Directory listing.
//!
//! Lists exactly one level of a resolved directory, producing entries in
//! lexicographic order by name together with the navigation context (the
//! current directory and its parent) a presentation layer needs.

use std::fs;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::normalize::join_posix;
use crate::path::{PathResolver, ResolvedPath};

/// One entry of a directory listing.
///
/// Serializes with a `type` tag, e.g.
/// `{"type":"file","name":"a.png","size":3,"relative_path":"imgs/a.png"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DirEntry {
    /// A subdirectory.
    Directory {
        /// The entry's file name.
        name: String,
        /// Root-relative path with `/` separators.
        relative_path: String,
    },
    /// A regular file.
    File {
        /// The entry's file name.
        name: String,
        /// Size in bytes.
        size: u64,
        /// Root-relative path with `/` separators.
        relative_path: String,
    },
}

impl DirEntry {
    /// The entry's file name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// The entry's root-relative path.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        match self {
            Self::Directory { relative_path, .. } | Self::File { relative_path, .. } => {
                relative_path
            }
        }
    }

    /// Size in bytes, `None` for directories.
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        match self {
            Self::Directory { .. } => None,
            Self::File { size, .. } => Some(*size),
        }
    }

    /// Whether this entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}

/// The contents of one directory plus navigation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Root-relative path of the listed directory (`""` for the root).
    pub current: String,
    /// Root-relative path of the parent; `None` when listing the root.
    pub parent: Option<String>,
    /// Entries sorted by name.
    pub entries: Vec<DirEntry>,
}

impl Listing {
    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no listable entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the subdirectory entries.
    pub fn directories(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| e.is_dir())
    }

    /// Iterate over the file entries.
    pub fn files(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| !e.is_dir())
    }
}

/// List the immediate children of a resolved directory.
///
/// Entries whose metadata cannot be read (dangling symlinks, permission
/// problems), symlinks that lead outside the root, and entries that are
/// neither a regular file nor a directory are skipped.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `dir` is not an existing directory or
/// cannot be read.
///
/// # Examples
///
/// ```no_run
/// use fileweb::listing::list_directory;
/// use fileweb::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
/// let imgs = resolver.resolve("imgs").unwrap();
/// let listing = list_directory(&resolver, &imgs).unwrap();
///
/// assert_eq!(listing.current, "imgs");
/// assert_eq!(listing.parent.as_deref(), Some(""));
/// ```
pub fn list_directory(resolver: &PathResolver, dir: &ResolvedPath) -> Result<Listing> {
    if !dir.is_dir() {
        return Err(Error::not_found(dir.original()));
    }

    let read_dir = fs::read_dir(dir.path()).map_err(|e| {
        log::debug!("cannot read directory '{}': {e}", dir.original());
        Error::not_found(dir.original())
    })?;

    let current = dir.relative();
    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping unreadable entry in '{current}': {e}");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let relative_path = join_posix(current, &name);

        let is_symlink = entry.file_type().map(|t| t.is_symlink()).unwrap_or(false);
        if is_symlink && resolver.resolve_walked(&entry.path()).is_err() {
            log::debug!("skipping symlink '{relative_path}' that leaves the root");
            continue;
        }

        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::debug!("skipping '{relative_path}': {e}");
                continue;
            }
        };

        if metadata.is_dir() {
            entries.push(DirEntry::Directory {
                name,
                relative_path,
            });
        } else if metadata.is_file() {
            entries.push(DirEntry::File {
                name,
                size: metadata.len(),
                relative_path,
            });
        } else {
            log::debug!("skipping '{relative_path}': not a file or directory");
        }
    }

    entries.sort_by(|a, b| a.name().cmp(b.name()));

    Ok(Listing {
        current: current.to_string(),
        parent: dir.parent_relative(),
        entries,
    })
}
