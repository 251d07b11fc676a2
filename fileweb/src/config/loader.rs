//! Configuration file discovery and loading.
//!
//! This module handles finding and loading fileweb configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory below the home directory holding the user configuration.
pub const USER_CONFIG_DIR: &str = ".fileweb";
/// File name of the user configuration.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use fileweb::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.fileweb/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use fileweb::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration file to use.
    ///
    /// An explicitly named file must exist. Without one, the user config at
    /// `~/.fileweb/config.yaml` is loaded when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if a file exists
    /// but cannot be read or parsed.
    pub fn load_all(explicit: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Configuration file does not exist".to_string(),
                    });
                }
                sources.push(ConfigSource {
                    path: path.to_path_buf(),
                    precedence: 2,
                    config: Self::load_file(path)?,
                });
            }
            None => {
                if let Some(user_config) = Self::load_user_config()? {
                    sources.push(user_config);
                }
            }
        }

        Ok(sources)
    }

    /// Load the user configuration file, if there is one.
    fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(config_path) = Self::user_config_path() else {
            log::debug!("no home directory; skipping user configuration");
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        log::debug!("loading configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// The user configuration path, `~/.fileweb/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}
