//! Environment variable handling for configuration overrides.
//!
//! This module provides support for FILEWEB_* environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Overrides the root directory.
pub const ROOT_ENV: &str = "FILEWEB_ROOT";
/// Overrides the shared username.
pub const USERNAME_ENV: &str = "FILEWEB_USERNAME";
/// Overrides the shared password.
pub const PASSWORD_ENV: &str = "FILEWEB_PASSWORD";
/// Overrides the default listing format.
pub const OUTPUT_FORMAT_ENV: &str = "FILEWEB_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use fileweb::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the FILEWEB_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs. An empty
    /// `FILEWEB_ROOT` is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `FILEWEB_OUTPUT_FORMAT` names no known format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // FILEWEB_ROOT
        if let Some(root) = env::var_os(ROOT_ENV) {
            if !root.is_empty() {
                config.root = Some(PathBuf::from(root));
            }
        }

        // FILEWEB_USERNAME
        if let Ok(username) = env::var(USERNAME_ENV) {
            config.username = Some(username);
        }

        // FILEWEB_PASSWORD
        if let Ok(password) = env::var(PASSWORD_ENV) {
            config.password = Some(password);
        }

        // FILEWEB_OUTPUT_FORMAT
        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(OutputFormat::parse(&format).map_err(|value| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: format!("Unknown format '{value}' (expected table, json, csv or tsv)"),
                }
            })?);
        }

        Ok(())
    }
}
