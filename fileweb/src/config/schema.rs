//! Configuration schema definitions.
//!
//! This module defines the configuration file structure for fileweb.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged; the validator decides what must be present in the
/// final result.
///
/// # Examples
///
/// ```
/// use fileweb::config::Config;
///
/// let yaml = "root: /srv/files\nusername: admin\npassword: hunter2\n";
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.username.as_deref(), Some("admin"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root directory exposed to users. May start with `~`.
    pub root: Option<PathBuf>,

    /// Username of the single shared account.
    pub username: Option<String>,

    /// Password of the single shared account.
    pub password: Option<String>,

    /// Default output format for list commands.
    pub output_format: Option<OutputFormat>,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use fileweb::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    #[default]
    Table,
}

impl OutputFormat {
    /// Parse a format name as used in environment variables.
    ///
    /// # Errors
    ///
    /// Returns the offending value if it names no format.
    pub fn parse(value: &str) -> std::result::Result<Self, String> {
        match value.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            _ => Err(value.to_string()),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}
