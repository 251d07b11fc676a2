#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fileweb
//!
//! A library for password-gated browsing of a single directory tree.
//!
//! Authenticated users can list the directories below a configured root,
//! download individual files, and download any selection of files and
//! directories as a single uncompressed ZIP archive. Every user-supplied
//! path is confined to the root.
//!
//! ## Core Types
//!
//! - [`FileBrowser`]: the list / download / archive entry points
//! - [`PathResolver`] and [`ResolvedPath`]: root-confined path resolution
//! - [`Listing`] and [`DirEntry`]: directory listings
//! - [`FileDownload`]: a file opened for streaming
//! - [`Selection`] and [`ArchiveSummary`]: bulk downloads
//! - [`SessionGate`], [`MemorySession`] and [`Authenticator`]: login state
//! - [`Settings`] and [`ConfigBuilder`]: configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fileweb::config::{Credentials, Settings};
//! use fileweb::{ArchiveRequest, Error, FileBrowser, MemorySession, Selection};
//!
//! let root = tempfile::tempdir().unwrap();
//! std::fs::create_dir(root.path().join("imgs")).unwrap();
//! std::fs::write(root.path().join("imgs").join("a.png"), b"png").unwrap();
//! std::fs::write(root.path().join("report.pdf"), b"pdf").unwrap();
//!
//! let settings = Settings::new(
//!     Some(root.path().to_path_buf()),
//!     Credentials::new("admin", "hunter2"),
//! );
//! let browser = FileBrowser::new(settings);
//! let mut session = MemorySession::new();
//!
//! // Nothing works before logging in.
//! assert!(matches!(browser.list(&mut session, ""), Err(Error::NotAuthenticated)));
//! browser.authenticator().login(&mut session, "admin", "hunter2").unwrap();
//!
//! let listing = browser.list(&mut session, "").unwrap();
//! assert_eq!(listing.len(), 2);
//!
//! // Paths outside the root look exactly like missing ones.
//! let err = browser.download(&mut session, "../etc/passwd").unwrap_err();
//! assert_eq!(err.to_string(), "not found: ../etc/passwd");
//!
//! let request = ArchiveRequest::new(Selection::new(["imgs", "report.pdf"]));
//! let archive = browser.download_archive(&mut session, &request).unwrap();
//! assert_eq!(archive.file_name, "files.zip");
//! assert_eq!(archive.summary.written, 2);
//! ```

pub mod archive;
pub mod browser;
pub mod config;
pub mod download;
pub mod error;
pub mod listing;
pub mod logging;
pub mod path;
pub mod session;

// Re-export key types at crate root for convenience
pub use archive::{ArchiveSummary, Selection};
pub use browser::{ArchiveDownload, ArchiveRequest, FileBrowser};
pub use config::{Config, ConfigBuilder, Settings};
pub use download::FileDownload;
pub use error::{Error, Result};
pub use listing::{DirEntry, Listing};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathRelationship, PathResolver, ResolvedPath};
pub use session::{Authenticator, MemorySession, SessionGate};
