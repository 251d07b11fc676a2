//! Root-confined path resolution.
//!
//! This module provides the `PathResolver` type, the single entry point for
//! turning user-supplied relative paths into filesystem paths.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::relationship::PathRelationship;
use crate::path::types::ResolvedPath;
use crate::path::{canonicalize, normalize};

/// Resolves user-supplied paths against a fixed root directory.
///
/// The root is normalized and canonicalized once, when the resolver is
/// built. Every requested path is then joined onto the root, canonicalized
/// (collapsing `..` and following symlinks) and accepted only if the
/// canonical result is the root or lies below it.
///
/// Any failure, whether the entry is missing, unreadable or outside the
/// root, is reported as [`Error::NotFound`] carrying only the string the
/// caller supplied.
///
/// # Examples
///
/// ```no_run
/// use fileweb::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
///
/// let root = resolver.resolve("").unwrap();
/// assert!(root.is_root());
///
/// let err = resolver.resolve("../etc/passwd").unwrap_err();
/// assert_eq!(err.to_string(), "not found: ../etc/passwd");
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Canonical root directory.
    root: PathBuf,
    /// The root as it was configured, kept for error reporting.
    configured: PathBuf,
}

impl PathResolver {
    /// Create a resolver for the given root directory.
    ///
    /// `~` is expanded and relative roots are made absolute before the root
    /// is canonicalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConfigured`] if the root does not exist or is not
    /// a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileweb::path::PathResolver;
    /// use std::path::Path;
    ///
    /// let err = PathResolver::new(Path::new("/definitely/not/here")).unwrap_err();
    /// assert!(err.is_not_configured());
    /// ```
    pub fn new(root: &Path) -> Result<Self> {
        let not_configured = || Error::NotConfigured {
            root: Some(root.to_path_buf()),
        };

        let canonical = normalize::normalize(root)
            .and_then(|normalized| canonicalize::canonical_root(&normalized))
            .map_err(|e| {
                log::debug!("root {} is unusable: {e}", root.display());
                not_configured()
            })?;

        log::debug!("resolved root {} to {}", root.display(), canonical.display());

        Ok(Self {
            root: canonical,
            configured: root.to_path_buf(),
        })
    }

    /// Create a resolver from an optional configured root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConfigured`] if `root` is `None` or unusable.
    pub fn from_configured(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(root) => Self::new(root),
            None => Err(Error::NotConfigured { root: None }),
        }
    }

    /// The canonical root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The root as it was configured, before normalization.
    #[must_use]
    pub fn configured_root(&self) -> &Path {
        &self.configured
    }

    /// Resolve a user-supplied relative path.
    ///
    /// The empty string resolves to the root itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the path does not exist, cannot be
    /// canonicalized, or resolves outside the root.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fileweb::path::PathResolver;
    /// use std::path::Path;
    ///
    /// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
    /// let resolved = resolver.resolve("imgs/../report.pdf").unwrap();
    /// assert_eq!(resolved.relative(), "report.pdf");
    /// ```
    pub fn resolve(&self, relative: &str) -> Result<ResolvedPath> {
        let joined = self.root.join(relative);
        let canonical = self.confine(&joined, relative)?;
        let relative_name = self
            .relative_to_root(&canonical)
            .ok_or_else(|| Error::not_found(relative))?;

        Ok(ResolvedPath::new(canonical, relative, relative_name))
    }

    /// Re-resolve an absolute path found while walking a resolved directory.
    ///
    /// The containment check is repeated, so symlinks met during the walk
    /// cannot point outside the root. The returned path's
    /// [`original`](ResolvedPath::original) is the walked location relative
    /// to the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the entry vanished, cannot be
    /// canonicalized, or resolves outside the root.
    pub fn resolve_walked(&self, path: &Path) -> Result<ResolvedPath> {
        let walked = self
            .relative_to_root(path)
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let canonical = self.confine(path, &walked)?;
        let relative_name = self
            .relative_to_root(&canonical)
            .ok_or_else(|| Error::not_found(walked.as_str()))?;

        Ok(ResolvedPath::new(canonical, walked, relative_name))
    }

    /// Render a path below the root as a `/`-separated root-relative string.
    ///
    /// Returns `None` if the path is not the root or below it. The check is
    /// lexical; no filesystem access takes place.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fileweb::path::PathResolver;
    /// use std::path::Path;
    ///
    /// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
    /// let inside = resolver.root().join("imgs").join("a.png");
    /// assert_eq!(resolver.relative_to_root(&inside).as_deref(), Some("imgs/a.png"));
    /// assert_eq!(resolver.relative_to_root(Path::new("/etc")), None);
    /// ```
    #[must_use]
    pub fn relative_to_root(&self, path: &Path) -> Option<String> {
        path.strip_prefix(&self.root)
            .ok()
            .map(normalize::to_posix)
    }

    /// Canonicalize `path` and check that it stays inside the root.
    fn confine(&self, path: &Path, requested: &str) -> Result<PathBuf> {
        let canonical = match canonicalize::canonicalize(path) {
            Ok(canonical) => canonical,
            Err(e) => {
                log::debug!("rejecting '{requested}': {e}");
                return Err(Error::not_found(requested));
            }
        };

        let relationship = PathRelationship::between(&self.root, &canonical);
        if !relationship.keeps_inside() {
            log::debug!("rejecting '{requested}': {}", relationship.rejection_reason());
            return Err(Error::not_found(requested));
        }

        Ok(canonical)
    }
}
