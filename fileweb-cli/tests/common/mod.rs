//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary root and config file
//! - Command builder helpers for common patterns
//! - Helpers for reading back produced archives

use assert_cmd::Command;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Username written into every test config.
pub const USERNAME: &str = "admin";
/// Password written into every test config.
pub const PASSWORD: &str = "correct horse";

/// Environment variables that would leak the developer's setup into a test.
const ISOLATED_VARS: [&str; 7] = [
    "FILEWEB_ROOT",
    "FILEWEB_USERNAME",
    "FILEWEB_PASSWORD",
    "FILEWEB_OUTPUT_FORMAT",
    "FILEWEB_LOGIN_USER",
    "FILEWEB_LOGIN_PASSWORD",
    "FILEWEB_LOG_MODE",
];

/// Test environment with an isolated root, home and working directory.
///
/// This struct provides an isolated test environment with:
/// - `<tmp>/data`: the served root
/// - `<tmp>/config.yaml`: a config pointing at the root
/// - `<tmp>/work`: the working directory commands run in
/// - `<tmp>` doubling as `$HOME`, so no user config is picked up
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// The served root directory
    pub root: PathBuf,
    /// The working directory
    pub work: PathBuf,
    /// The config file
    pub config: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty root.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let root = temp_path.join("data");
        let work = temp_path.join("work");
        let config = temp_path.join("config.yaml");

        std::fs::create_dir(&root).expect("Failed to create root");
        std::fs::create_dir(&work).expect("Failed to create work dir");

        let env = Self {
            temp_dir,
            temp_path,
            root,
            work,
            config,
        };
        env.write_config(&format!(
            "root: {}\nusername: {USERNAME}\npassword: {PASSWORD}\n",
            env.root.display()
        ));
        env
    }

    /// The standard sample tree: `report.pdf` (1000 bytes), `imgs/a.png`,
    /// `imgs/b.png`, `imgs/2024/c.png` and an empty `empty/`.
    pub fn sample() -> Self {
        let env = Self::new();
        env.create_file("report.pdf", &[b'P'; 1000]);
        env.create_file("imgs/a.png", b"PNG-A");
        env.create_file("imgs/b.png", b"PNG-BB");
        env.create_file("imgs/2024/c.png", b"PNG-CCC");
        env.create_dir("empty");
        env
    }

    /// Replace the config file contents.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config, contents).expect("Failed to write config");
    }

    /// Get a bare command builder without credentials or config.
    ///
    /// The command runs in the work directory with `$HOME` pointed at the
    /// temp dir and every FILEWEB_* variable removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("fileweb").expect("Failed to find fileweb binary");
        cmd.current_dir(&self.work).env("HOME", &self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with config and credentials pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config")
            .arg(&self.config)
            .arg("--user")
            .arg(USERNAME)
            .arg("--password")
            .arg(PASSWORD);
        cmd
    }

    /// Create a directory below the root.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file below the root, with parent directories.
    pub fn create_file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a file next to the root, outside of it.
    pub fn create_outside_file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_path.join(relative);
        std::fs::write(&path, contents).expect("Failed to write outside file");
        path
    }

    /// Path inside the work directory.
    pub fn work_path(&self, name: &str) -> PathBuf {
        self.work.join(name)
    }

    /// Run `fileweb list` with extra args and return stdout.
    pub fn list(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("list")
            .args(args)
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Read `(name, stored, contents)` for every entry of a ZIP archive.
#[allow(dead_code)]
pub fn read_zip(bytes: &[u8]) -> Vec<(String, bool, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("Not a ZIP archive");
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).expect("Unreadable ZIP entry");
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).expect("Unreadable ZIP entry");
        entries.push((
            file.name().to_string(),
            file.compression() == zip::CompressionMethod::Stored,
            contents,
        ));
    }
    entries
}

/// Names of the entries of a ZIP archive, in archive order.
#[allow(dead_code)]
pub fn zip_names(bytes: &[u8]) -> Vec<String> {
    read_zip(bytes).into_iter().map(|(name, _, _)| name).collect()
}
