//! Store-only ZIP output.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::archive::selection::ArchiveMember;
use crate::error::Result;
use crate::path::PathResolver;

/// Archive name used when there is no usable directory context.
pub const DEFAULT_ARCHIVE_NAME: &str = "files.zip";

/// Members at or above this size need ZIP64 headers.
const LARGE_FILE_THRESHOLD: u64 = u32::MAX as u64;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Members are staged in memory up to this size, then on a temp file.
const SPOOL_MEMORY_LIMIT: usize = 8 * 1024 * 1024;

/// Outcome of writing an archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Members stored in the archive.
    pub written: usize,
    /// Members left out because they could not be read.
    pub skipped: usize,
}

impl ArchiveSummary {
    /// Whether every member made it into the archive.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

enum CopyError {
    Read(io::Error),
    Write(io::Error),
}

/// Write `members` into a store-only ZIP archive.
///
/// Entries are stored without compression, in the order given and under
/// their member names; repeated names are written as repeated entries. A
/// member that cannot be opened, or whose read fails part way, is left out
/// and counted in [`ArchiveSummary::skipped`] while the rest of the archive
/// is still produced. Each member is staged completely before its entry is
/// started, so a skipped member leaves no partial entry behind.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails or the ZIP writer itself
/// reports a failure.
///
/// # Examples
///
/// ```no_run
/// use fileweb::archive::{collect_members, write_archive, Selection};
/// use fileweb::path::PathResolver;
/// use std::io::Cursor;
/// use std::path::Path;
///
/// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
/// let members = collect_members(&resolver, &Selection::new(["imgs"])).unwrap();
///
/// let mut buffer = Cursor::new(Vec::new());
/// let summary = write_archive(&members, &mut buffer).unwrap();
/// assert!(summary.is_complete());
/// ```
pub fn write_archive<W: Write + Seek>(members: &[ArchiveMember], writer: W) -> Result<ArchiveSummary> {
    let mut zip = ZipWriter::new(writer);
    let mut summary = ArchiveSummary::default();

    for member in members {
        let mut file = match File::open(member.source.path()) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("leaving '{}' out of the archive: {e}", member.name);
                summary.skipped += 1;
                continue;
            }
        };

        // A ZIP entry cannot be taken back once started, so the member is
        // read in full before its entry is opened.
        let mut staged = tempfile::spooled_tempfile(SPOOL_MEMORY_LIMIT);
        let size = match copy_member(&mut file, &mut staged) {
            Ok(size) => size,
            Err(CopyError::Read(e)) => {
                log::warn!("leaving '{}' out of the archive: {e}", member.name);
                summary.skipped += 1;
                continue;
            }
            Err(CopyError::Write(e)) => return Err(e.into()),
        };
        staged.seek(SeekFrom::Start(0))?;

        let options = FileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .large_file(size >= LARGE_FILE_THRESHOLD);

        zip.start_file(member.name.as_str(), options)?;
        io::copy(&mut staged, &mut zip)?;

        log::debug!("stored '{}' ({size} bytes)", member.name);
        summary.written += 1;
    }

    zip.finish()?;

    log::debug!(
        "archive finished: {} written, {} skipped",
        summary.written,
        summary.skipped
    );
    Ok(summary)
}

fn copy_member<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> std::result::Result<u64, CopyError> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };
        writer.write_all(&buf[..n]).map_err(CopyError::Write)?;
        total += n as u64;
    }
}

/// Choose the download name for an archive.
///
/// With a directory context below the root the archive is named after that
/// directory (`imgs.zip`); otherwise, including when the context is the
/// root or does not resolve, [`DEFAULT_ARCHIVE_NAME`] is used.
///
/// # Examples
///
/// ```no_run
/// use fileweb::archive::archive_file_name;
/// use fileweb::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
/// assert_eq!(archive_file_name(&resolver, None), "files.zip");
/// assert_eq!(archive_file_name(&resolver, Some("imgs/2024")), "2024.zip");
/// ```
#[must_use]
pub fn archive_file_name(resolver: &PathResolver, current_dir: Option<&str>) -> String {
    let Some(current_dir) = current_dir else {
        return DEFAULT_ARCHIVE_NAME.to_string();
    };

    match resolver.resolve(current_dir) {
        Ok(dir) if !dir.is_root() && dir.is_dir() => {
            let name = dir.relative().rsplit('/').next().unwrap_or_default();
            format!("{name}.zip")
        }
        _ => DEFAULT_ARCHIVE_NAME.to_string(),
    }
}
