//! Immutable runtime settings.
//!
//! [`Settings`] is what the rest of the library consumes. It is built once
//! from a validated [`Config`] and handed explicitly to the components that
//! need it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::path::PathResolver;

/// The single shared username and password.
///
/// The password never appears in `Debug` output.
///
/// # Examples
///
/// ```
/// use fileweb::config::Credentials;
///
/// let credentials = Credentials::new("admin", "hunter2");
/// assert!(credentials.matches("admin", "hunter2"));
/// assert!(!format!("{credentials:?}").contains("hunter2"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The configured username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether the supplied pair equals the configured one.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Settings the library runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    root: Option<PathBuf>,
    /// The shared login.
    pub credentials: Credentials,
    /// Default format for listings.
    pub output_format: OutputFormat,
}

impl Settings {
    /// Create settings with the default output format.
    #[must_use]
    pub fn new(root: Option<PathBuf>, credentials: Credentials) -> Self {
        Self {
            root,
            credentials,
            output_format: OutputFormat::default(),
        }
    }

    /// The configured root, exactly as configured.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Build a resolver for the configured root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConfigured`] if the root is unset or unusable.
    pub fn resolver(&self) -> Result<PathResolver> {
        PathResolver::from_configured(self.root())
    }
}

impl TryFrom<Config> for Settings {
    type Error = Error;

    fn try_from(config: Config) -> Result<Self> {
        let username = config.username.ok_or_else(|| Error::Validation {
            field: "username".into(),
            message: "A username must be configured".into(),
        })?;
        let password = config.password.ok_or_else(|| Error::Validation {
            field: "password".into(),
            message: "A password must be configured".into(),
        })?;

        Ok(Self {
            root: config.root,
            credentials: Credentials::new(username, password),
            output_format: config.output_format.unwrap_or_default(),
        })
    }
}
