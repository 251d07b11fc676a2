//! Lexical path helpers.
//!
//! [`normalize`] turns the configured root into an absolute path before it
//! is canonicalized. The `*_posix` helpers build the `/`-separated
//! root-relative names used in listings, downloads and archive entries.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

fn invalid(path: &Path, reason: impl Into<String>) -> Error {
    Error::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Replace a leading `~` with the home directory.
///
/// `~` and `~/rest` are expanded; `~name` forms are refused. Paths that do
/// not start with `~` come back unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] for `~name`, for non-UTF-8 input starting
/// with `~`, or when the home directory is unknown.
///
/// # Examples
///
/// ```
/// use fileweb::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let shared = expand_tilde(Path::new("~/shared")).unwrap();
/// assert!(shared.is_absolute());
/// assert!(shared.ends_with("shared"));
///
/// assert_eq!(expand_tilde(Path::new("/srv")).unwrap(), Path::new("/srv"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(first) = path.components().next() else {
        return Ok(PathBuf::new());
    };
    if !matches!(first, Component::Normal(c) if c.to_string_lossy().starts_with('~')) {
        return Ok(path.to_path_buf());
    }

    let text = path
        .to_str()
        .ok_or_else(|| invalid(path, "path is not valid UTF-8"))?;
    let rest = match text.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return Err(invalid(path, "only ~ and ~/path are expanded")),
    };

    let home = home::home_dir().ok_or_else(|| invalid(path, "home directory is unknown"))?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}

/// Drop `.` segments and fold `..` into the preceding segment.
///
/// A `..` directly below the filesystem root stays at the root, the same as
/// the operating system treats `/..`.
///
/// ```
/// use fileweb::path::normalize::collapse_dots;
/// use std::path::Path;
///
/// assert_eq!(collapse_dots(Path::new("/a/./b/../c")), Path::new("/a/c"));
/// assert_eq!(collapse_dots(Path::new("/../etc")), Path::new("/etc"));
/// ```
#[must_use]
pub fn collapse_dots(path: &Path) -> PathBuf {
    let mut anchor = PathBuf::new();
    let mut segments: Vec<&std::ffi::OsStr> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => anchor.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if segments.pop().is_none() && anchor.as_os_str().is_empty() {
                    segments.push(component.as_os_str());
                }
            }
            Component::Normal(name) => segments.push(name),
        }
    }

    segments.into_iter().fold(anchor, |mut acc, s| {
        acc.push(s);
        acc
    })
}

/// Make `path` absolute and lexically clean.
///
/// Tilde expansion comes first, then relative paths are joined onto the
/// working directory, then dot segments are collapsed. Symlinks are left
/// alone; the resolver canonicalizes afterwards.
///
/// # Errors
///
/// Fails when tilde expansion fails or the working directory is unavailable.
///
/// ```no_run
/// use fileweb::path::normalize::normalize;
/// use std::path::Path;
///
/// assert!(normalize(Path::new("~/shared")).unwrap().is_absolute());
/// assert_eq!(normalize(Path::new("/a/./b/../c")).unwrap(), Path::new("/a/c"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let mut absolute = expand_tilde(path)?;
    if !absolute.is_absolute() {
        let cwd = env::current_dir()
            .map_err(|e| invalid(path, format!("working directory is unavailable: {e}")))?;
        absolute = cwd.join(absolute);
    }
    Ok(collapse_dots(&absolute))
}

/// Render a relative path with `/` separators regardless of platform.
///
/// Only normal components are kept; an empty path renders as `""`.
///
/// # Examples
///
/// ```
/// use fileweb::path::normalize::to_posix;
/// use std::path::Path;
///
/// assert_eq!(to_posix(Path::new("imgs").join("a.png").as_path()), "imgs/a.png");
/// assert_eq!(to_posix(Path::new("")), "");
/// ```
#[must_use]
pub fn to_posix(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a root-relative POSIX path and a child name.
///
/// # Examples
///
/// ```
/// use fileweb::path::normalize::join_posix;
///
/// assert_eq!(join_posix("", "report.pdf"), "report.pdf");
/// assert_eq!(join_posix("imgs", "a.png"), "imgs/a.png");
/// ```
#[must_use]
pub fn join_posix(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

/// The root-relative POSIX path of a path's parent.
///
/// Returns `None` for the root itself (`""`) and `Some("")` for direct
/// children of the root.
///
/// # Examples
///
/// ```
/// use fileweb::path::normalize::parent_posix;
///
/// assert_eq!(parent_posix(""), None);
/// assert_eq!(parent_posix("imgs"), Some(String::new()));
/// assert_eq!(parent_posix("imgs/2024"), Some("imgs".to_string()));
/// ```
#[must_use]
pub fn parent_posix(relative: &str) -> Option<String> {
    if relative.is_empty() {
        return None;
    }
    Some(
        relative
            .rsplit_once('/')
            .map(|(parent, _)| parent.to_string())
            .unwrap_or_default(),
    )
}
