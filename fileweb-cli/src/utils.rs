//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, logging in, and choosing where output
//! is written.

use crate::error::CliError;
use fileweb::{ConfigBuilder, FileBrowser, MemorySession, Settings};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Username to log in with.
    pub user: Option<String>,

    /// Password to log in with.
    pub password: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file, or `~/.fileweb/config.yaml`
/// 3. Built-in defaults (lowest priority)
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder
        .build_settings()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Load the settings and log a fresh session in with the global credentials.
///
/// # Errors
///
/// Returns `MissingCredentials` when `--user` or `--password` is absent, and
/// the library error when the credentials are wrong or the root is unusable.
pub fn login(global: &GlobalOptions) -> Result<(FileBrowser, MemorySession), CliError> {
    let settings = load_settings(global)?;

    let (Some(user), Some(password)) = (global.user.as_deref(), global.password.as_deref()) else {
        return Err(CliError::MissingCredentials);
    };

    let browser = FileBrowser::new(settings);
    let mut session = MemorySession::new();
    browser.authenticator().login(&mut session, user, password)?;

    Ok((browser, session))
}

/// Where a command writes the bytes it downloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output (`-o -`).
    Stdout,
    /// A file on disk.
    File(PathBuf),
}

impl OutputTarget {
    /// Choose the target from the `-o` argument, falling back to
    /// `default_name` in the current directory.
    pub fn from_arg(arg: Option<&Path>, default_name: &str) -> Self {
        match arg {
            Some(path) if path == Path::new("-") => Self::Stdout,
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::File(PathBuf::from(default_name)),
        }
    }

    /// Run `write` against the target.
    ///
    /// A file target that fails part way is removed again so no truncated
    /// download is left behind.
    pub fn write_with<F>(&self, write: F) -> Result<u64, CliError>
    where
        F: FnOnce(&mut dyn Write) -> Result<u64, CliError>,
    {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                let written = write(&mut handle)?;
                handle.flush()?;
                Ok(written)
            }
            Self::File(path) => {
                let mut file = File::create(path)?;
                let result = write(&mut file).and_then(|written| {
                    file.flush()?;
                    Ok(written)
                });
                if result.is_err() {
                    drop(file);
                    if let Err(e) = std::fs::remove_file(path) {
                        log::debug!("could not remove partial '{}': {e}", path.display());
                    }
                }
                result
            }
        }
    }

    /// Describe the target for status messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout => "standard output".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Format a byte count for display.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in UNITS[1..].iter().copied() {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{value:.1} {unit}")
}
