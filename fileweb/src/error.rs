//! Error types for the fileweb library.
//!
//! This module provides the single error hierarchy used by every fileweb
//! component, using `thiserror` for ergonomic error handling.
//!
//! The variants a presentation layer is expected to turn into user-facing
//! messages are [`Error::NotConfigured`], [`Error::NotFound`],
//! [`Error::EmptySelection`], [`Error::NoValidSelection`] and
//! [`Error::TransientReadFailure`]. `NotFound` carries only the
//! string the user supplied, never the filesystem location it resolved to.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a fileweb error.
///
/// # Examples
///
/// ```
/// use fileweb::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(1024)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fileweb library.
#[derive(Debug, Error)]
pub enum Error {
    /// The root directory is unset or does not exist.
    #[error("file root is not configured{}", missing_root_suffix(root.as_deref()))]
    NotConfigured {
        /// The configured root, if one was set.
        root: Option<PathBuf>,
    },

    /// The requested path does not resolve to an existing, in-bounds entry.
    ///
    /// Covers both genuinely absent paths and attempts to escape the root.
    #[error("not found: {path}")]
    NotFound {
        /// The path as supplied by the caller.
        path: String,
    },

    /// A bulk download was requested with nothing selected.
    #[error("nothing selected")]
    EmptySelection,

    /// Every selected item was invalid or missing.
    #[error("nothing found to download")]
    NoValidSelection,

    /// A validated file vanished or became unreadable before it was read.
    #[error("file unavailable: {path}: {source}")]
    TransientReadFailure {
        /// The root-relative path of the file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The session has not been authenticated.
    #[error("authentication required")]
    NotAuthenticated,

    /// The supplied username or password is wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The archive writer failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn missing_root_suffix(root: Option<&std::path::Path>) -> String {
    match root {
        Some(path) => format!(" (directory not found: {})", path.display()),
        None => String::new(),
    }
}

impl Error {
    /// Build a `NotFound` error for a user-supplied path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileweb::Error;
    ///
    /// let err = Error::not_found("../../etc/passwd");
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Check if error indicates a requested entry does not exist.
    ///
    /// Internal canonicalization failures count as well, so callers can
    /// treat both the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileweb::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::PathNotFound { .. })
    }

    /// Check if error means the root directory is unusable.
    #[must_use]
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileweb::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error is one of the two bulk-download selection failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileweb::Error;
    ///
    /// assert!(Error::EmptySelection.is_selection_error());
    /// assert!(Error::NoValidSelection.is_selection_error());
    /// assert!(!Error::NotAuthenticated.is_selection_error());
    /// ```
    #[must_use]
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::EmptySelection | Self::NoValidSelection)
    }

    /// Check if error comes from the authentication gate.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::InvalidCredentials)
    }
}
