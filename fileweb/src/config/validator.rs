//! Configuration validation.
//!
//! This module checks a merged configuration before settings are built
//! from it.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use fileweb::config::{Config, ConfigValidator};
///
/// let config = Config {
///     username: Some("admin".into()),
///     password: Some("hunter2".into()),
///     ..Default::default()
/// };
/// ConfigValidator::validate(&config).unwrap();
///
/// assert!(ConfigValidator::validate(&Config::default()).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Username and password are required. The root is optional: a missing
    /// root is reported when an operation runs, not here.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        match config.username {
            Some(ref username) => Self::validate_identifier("username", username)?,
            None => {
                return Err(Error::Validation {
                    field: "username".into(),
                    message: "A username must be configured".into(),
                })
            }
        }

        match config.password {
            Some(ref password) => Self::validate_secret("password", password)?,
            None => {
                return Err(Error::Validation {
                    field: "password".into(),
                    message: "A password must be configured".into(),
                })
            }
        }

        if let Some(ref root) = config.root {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "root".into(),
                    message: "Cannot be empty; leave it unset instead".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate a user-visible identifier.
    ///
    /// Checks that the identifier is non-empty after trimming, contains no
    /// null bytes, and is not longer than 255 characters.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }

        Ok(())
    }

    /// Validate a secret. Whitespace is significant, so nothing is trimmed.
    fn validate_secret(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }
}
