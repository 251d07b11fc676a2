//! Single-file downloads.
//!
//! A download hands back an open file handle rather than the file's
//! contents, so callers can stream arbitrarily large files.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::error::{Error, Result};
use crate::path::ResolvedPath;

/// Buffer size used by [`FileDownload::copy_to`].
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// An opened file ready to be streamed to the client.
///
/// `FileDownload` implements [`Read`], so it can be passed anywhere a reader
/// is expected.
#[derive(Debug)]
pub struct FileDownload {
    filename: String,
    relative: String,
    size: u64,
    reader: File,
}

impl FileDownload {
    /// The name the client should save the file as.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The root-relative path of the file.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    /// The file size in bytes at the time it was opened.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Consume the download and return the underlying file handle.
    #[must_use]
    pub fn into_reader(self) -> File {
        self.reader
    }

    /// Stream the whole file into `writer`, returning the number of bytes
    /// copied.
    ///
    /// # Errors
    ///
    /// A failure reading the file is reported as
    /// [`Error::TransientReadFailure`]; a failure writing to `writer` as
    /// [`Error::Io`].
    pub fn copy_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<u64> {
        let mut buf = vec![0u8; COPY_BUFFER_SIZE];
        let mut total = 0u64;

        loop {
            let n = match self.reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::TransientReadFailure {
                        path: self.relative.clone(),
                        source,
                    })
                }
            };
            writer.write_all(&buf[..n])?;
            total += n as u64;
        }

        writer.flush()?;
        Ok(total)
    }
}

impl Read for FileDownload {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

/// Open a resolved regular file for download.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `file` is not a regular file, and
/// [`Error::TransientReadFailure`] if it passed validation but could not be
/// opened, including when it vanished after being resolved.
///
/// # Examples
///
/// ```no_run
/// use fileweb::download::open_for_download;
/// use fileweb::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new(Path::new("/srv/files")).unwrap();
/// let report = resolver.resolve("report.pdf").unwrap();
/// let mut download = open_for_download(&report).unwrap();
/// assert_eq!(download.filename(), "report.pdf");
///
/// let mut stdout = std::io::stdout();
/// download.copy_to(&mut stdout).unwrap();
/// ```
pub fn open_for_download(file: &ResolvedPath) -> Result<FileDownload> {
    if file.is_root() || file.is_dir() {
        return Err(Error::not_found(file.original()));
    }

    let filename = file
        .file_name()
        .ok_or_else(|| Error::not_found(file.original()))?;

    let transient = |source| Error::TransientReadFailure {
        path: file.relative().to_string(),
        source,
    };

    // The file was validated on resolve; failing to open it now means it
    // went away or became unreadable in between.
    let reader = File::open(file.path()).map_err(transient)?;
    let metadata = reader.metadata().map_err(transient)?;
    if !metadata.is_file() {
        return Err(Error::not_found(file.original()));
    }
    let size = metadata.len();

    log::debug!("opened '{}' ({size} bytes) for download", file.relative());

    Ok(FileDownload {
        filename,
        relative: file.relative().to_string(),
        size,
        reader,
    })
}
