//! The file browser facade.
//!
//! [`FileBrowser`] is what a presentation layer talks to. Every operation
//! runs the same guard before touching the filesystem:
//!
//! 1. the session must be authenticated ([`Error::NotAuthenticated`]);
//! 2. the root must be configured and exist ([`Error::NotConfigured`]). When
//!    it does not, the session is cleared, logging the user out;
//! 3. a fresh [`PathResolver`] is built for the request.
//!
//! # Examples
//!
//! ```no_run
//! use fileweb::config::{Credentials, Settings};
//! use fileweb::session::{MemorySession, SessionGate};
//! use fileweb::FileBrowser;
//!
//! let settings = Settings::new(
//!     Some("/srv/files".into()),
//!     Credentials::new("admin", "hunter2"),
//! );
//! let browser = FileBrowser::new(settings);
//! let mut session = MemorySession::new();
//! browser.authenticator().login(&mut session, "admin", "hunter2").unwrap();
//!
//! let listing = browser.list(&mut session, "").unwrap();
//! for entry in &listing.entries {
//!     println!("{}", entry.name());
//! }
//! ```

use std::io::Cursor;

use crate::archive::{archive_file_name, build_archive, ArchiveSummary, Selection};
use crate::config::Settings;
use crate::download::{open_for_download, FileDownload};
use crate::error::Result;
use crate::listing::{list_directory, Listing};
use crate::path::PathResolver;
use crate::session::{Authenticator, SessionGate};

/// A bulk download request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveRequest {
    /// The selected root-relative paths.
    pub selection: Selection,
    /// The directory the selection was made from, if any.
    pub current_dir: Option<String>,
}

impl ArchiveRequest {
    /// Create a request without directory context.
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            current_dir: None,
        }
    }

    /// Attach the directory the selection was made from.
    #[must_use]
    pub fn with_current_dir(mut self, current_dir: impl Into<String>) -> Self {
        self.current_dir = Some(current_dir.into());
        self
    }

    /// The listing to go back to when the request fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileweb::archive::Selection;
    /// use fileweb::ArchiveRequest;
    ///
    /// let request = ArchiveRequest::new(Selection::new(["a.txt"]));
    /// assert_eq!(request.return_path(), "");
    ///
    /// let request = request.with_current_dir("imgs");
    /// assert_eq!(request.return_path(), "imgs");
    /// ```
    #[must_use]
    pub fn return_path(&self) -> &str {
        self.current_dir.as_deref().unwrap_or_default()
    }
}

/// A finished archive held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDownload {
    /// Suggested download name, e.g. `imgs.zip`.
    pub file_name: String,
    /// The complete ZIP file.
    pub bytes: Vec<u8>,
    /// How many members were written or skipped.
    pub summary: ArchiveSummary,
}

/// Entry point for the list, download and archive operations.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    settings: Settings,
}

impl FileBrowser {
    /// Create a browser over the given settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The settings this browser was built with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// An authenticator bound to this browser's credentials.
    #[must_use]
    pub fn authenticator(&self) -> Authenticator<'_> {
        Authenticator::new(&self.settings)
    }

    /// List a directory.
    ///
    /// # Errors
    ///
    /// Fails with the guard errors, or [`Error::NotFound`](crate::Error::NotFound)
    /// if `path` is not a directory inside the root.
    pub fn list<S: SessionGate + ?Sized>(&self, session: &mut S, path: &str) -> Result<Listing> {
        let resolver = self.guard(session)?;
        let dir = resolver.resolve(path)?;
        list_directory(&resolver, &dir)
    }

    /// Open a single file for download.
    ///
    /// # Errors
    ///
    /// Fails with the guard errors, [`Error::NotFound`](crate::Error::NotFound)
    /// if `path` is not a regular file inside the root, or
    /// [`Error::TransientReadFailure`](crate::Error::TransientReadFailure) if
    /// it cannot be opened.
    pub fn download<S: SessionGate + ?Sized>(
        &self,
        session: &mut S,
        path: &str,
    ) -> Result<FileDownload> {
        let resolver = self.guard(session)?;
        let file = resolver.resolve(path)?;
        open_for_download(&file)
    }

    /// Build a ZIP archive of the selected files and directories.
    ///
    /// # Errors
    ///
    /// Fails with the guard errors, or with
    /// [`Error::EmptySelection`](crate::Error::EmptySelection) /
    /// [`Error::NoValidSelection`](crate::Error::NoValidSelection).
    pub fn download_archive<S: SessionGate + ?Sized>(
        &self,
        session: &mut S,
        request: &ArchiveRequest,
    ) -> Result<ArchiveDownload> {
        let resolver = self.guard(session)?;

        let mut buffer = Cursor::new(Vec::new());
        let summary = build_archive(&resolver, &request.selection, &mut buffer)?;
        let file_name = archive_file_name(&resolver, request.current_dir.as_deref());

        log::debug!(
            "built {file_name} with {} members ({} skipped)",
            summary.written,
            summary.skipped
        );

        Ok(ArchiveDownload {
            file_name,
            bytes: buffer.into_inner(),
            summary,
        })
    }

    fn guard<S: SessionGate + ?Sized>(&self, session: &mut S) -> Result<PathResolver> {
        Authenticator::require_authenticated(session)?;

        self.settings.resolver().map_err(|e| {
            if e.is_not_configured() {
                log::warn!("{e}; logging the session out");
                session.clear();
            }
            e
        })
    }
}
