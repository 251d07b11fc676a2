//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for on-disk directory trees and
//! helpers for reading back the archives the library produces.

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use fileweb::config::{Credentials, Settings};
use fileweb::{FileBrowser, MemorySession};
use tempfile::TempDir;

/// Username used by every fixture.
#[allow(dead_code)]
pub const USERNAME: &str = "admin";
/// Password used by every fixture.
#[allow(dead_code)]
pub const PASSWORD: &str = "correct horse";

/// Builder for a temporary root directory with files in it.
///
/// The root lives in its own subdirectory (`<tmp>/data`) so tests can
/// place things next to it, such as a `data-evil` sibling.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_file("report.pdf", b"PDF")
///     .with_file("imgs/a.png", b"PNG");
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Create an empty root directory.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("data");
        fs::create_dir(&root).unwrap();
        Self { temp, root }
    }

    /// The standard sample tree: `report.pdf` (1024 bytes), `imgs/a.png`,
    /// `imgs/b.png`, an empty `empty/` directory and a nested `imgs/2024/`.
    pub fn sample() -> Self {
        Self::new()
            .with_file("report.pdf", &[b'P'; 1024])
            .with_file("imgs/a.png", b"PNG-A")
            .with_file("imgs/b.png", b"PNG-BB")
            .with_file("imgs/2024/c.png", b"PNG-CCC")
            .with_dir("empty")
    }

    /// Add a file, creating parent directories as needed.
    pub fn with_file(self, relative: &str, contents: &[u8]) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// Add an (empty) directory.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root.join(relative)).unwrap();
        self
    }

    /// Add a file next to the root, outside of it.
    pub fn with_outside_file(self, relative: &str, contents: &[u8]) -> Self {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// Add a symlink inside the root pointing at `target`.
    #[cfg(unix)]
    pub fn with_symlink(self, relative: &str, target: &Path) -> Self {
        std::os::unix::fs::symlink(target, self.root.join(relative)).unwrap();
        self
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The temporary directory containing the root.
    pub fn outside(&self) -> &Path {
        self.temp.path()
    }

    /// Settings pointing at this root with the fixture credentials.
    pub fn settings(&self) -> Settings {
        Settings::new(Some(self.root.clone()), Credentials::new(USERNAME, PASSWORD))
    }

    /// A browser plus an already logged-in session.
    pub fn logged_in(&self) -> (FileBrowser, MemorySession) {
        let browser = FileBrowser::new(self.settings());
        let mut session = MemorySession::new();
        browser
            .authenticator()
            .login(&mut session, USERNAME, PASSWORD)
            .unwrap();
        (browser, session)
    }
}

/// One entry read back from a ZIP archive.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    pub name: String,
    pub stored: bool,
    pub contents: Vec<u8>,
}

/// Read every entry of an in-memory ZIP archive, in archive order.
#[allow(dead_code)]
pub fn read_zip(bytes: &[u8]) -> Vec<ZipEntry> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        entries.push(ZipEntry {
            name: file.name().to_string(),
            stored: file.compression() == zip::CompressionMethod::Stored,
            contents,
        });
    }
    entries
}

/// Names of the entries of an in-memory ZIP archive, in archive order.
#[allow(dead_code)]
pub fn zip_names(bytes: &[u8]) -> Vec<String> {
    read_zip(bytes).into_iter().map(|e| e.name).collect()
}
