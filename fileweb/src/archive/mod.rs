//! Bulk downloads as ZIP archives.
//!
//! Building an archive happens in two steps:
//!
//! 1. [`collect_members`] expands a [`Selection`] of root-relative paths into
//!    the files to include, re-checking containment for every file found
//!    inside a selected directory.
//! 2. [`write_archive`] stores those files, uncompressed, into any
//!    `Write + Seek` sink.
//!
//! [`build_archive`] runs both steps.
//!
//! # Examples
//!
//! ```no_run
//! use fileweb::archive::{archive_file_name, build_archive, Selection};
//! use fileweb::path::PathResolver;
//! use std::fs::File;
//! use std::path::Path;
//!
//! let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
//! let name = archive_file_name(&resolver, Some("imgs"));
//! let out = File::create(&name).unwrap();
//!
//! let summary = build_archive(&resolver, &Selection::new(["imgs"]), out).unwrap();
//! println!("{name}: {} files", summary.written);
//! ```

mod selection;
mod writer;

use std::io::{Seek, Write};

pub use selection::{collect_members, ArchiveMember, Selection};
pub use writer::{archive_file_name, write_archive, ArchiveSummary, DEFAULT_ARCHIVE_NAME};

use crate::error::Result;
use crate::path::PathResolver;

/// Collect the members of `selection` and write them to `writer`.
///
/// Selection errors are raised before anything is written.
///
/// # Errors
///
/// See [`collect_members`] and [`write_archive`].
pub fn build_archive<W: Write + Seek>(
    resolver: &PathResolver,
    selection: &Selection,
    writer: W,
) -> Result<ArchiveSummary> {
    let members = collect_members(resolver, selection)?;
    write_archive(&members, writer)
}
