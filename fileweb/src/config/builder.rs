//! Configuration builder.
//!
//! Collects configuration from every source, merges it by precedence and
//! validates the result.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::settings::Settings;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for the final configuration.
///
/// # Examples
///
/// ```
/// use fileweb::config::{Config, ConfigBuilder};
///
/// let settings = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         username: Some("admin".into()),
///         password: Some("hunter2".into()),
///         ..Default::default()
///     })
///     .build_settings()
///     .unwrap();
///
/// assert_eq!(settings.credentials.username(), "admin");
/// assert!(settings.root().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user config file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of `~/.fileweb/config.yaml`.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore FILEWEB_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be loaded, an
    /// environment variable is invalid, or validation fails.
    pub fn build(&self) -> Result<Config> {
        let sources = if self.skip_files {
            Vec::new()
        } else {
            ConfigLoader::load_all(self.config_file.as_deref())?
        };

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Build immutable settings from the validated configuration.
    ///
    /// # Errors
    ///
    /// See [`ConfigBuilder::build`].
    pub fn build_settings(&self) -> Result<Settings> {
        Settings::try_from(self.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{PASSWORD_ENV, ROOT_ENV, USERNAME_ENV};
    use crate::error::Error;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    fn credentials() -> Config {
        Config {
            username: Some("admin".into()),
            password: Some("pw".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_programmatic_only() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(credentials())
            .build()
            .unwrap();
        assert_eq!(config.username.as_deref(), Some("admin"));
    }

    #[test]
    fn test_missing_credentials_fail_validation() {
        let err = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_file_then_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "root: /srv/files\nusername: file-user\npassword: file-pw\n").unwrap();

        let config = ConfigBuilder::new()
            .with_config_file(&path)
            .skip_env()
            .with_config(Config {
                username: Some("override".into()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.root, Some(PathBuf::from("/srv/files")));
        assert_eq!(config.username.as_deref(), Some("override"));
        assert_eq!(config.password.as_deref(), Some("file-pw"));
    }

    #[test]
    #[serial]
    fn test_env_beats_file_but_not_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "root: /srv/file\nusername: file-user\npassword: file-pw\n").unwrap();

        let saved: Vec<_> = [ROOT_ENV, USERNAME_ENV, PASSWORD_ENV]
            .iter()
            .map(|k| (*k, env::var_os(k)))
            .collect();
        env::set_var(ROOT_ENV, "/srv/env");
        env::set_var(USERNAME_ENV, "env-user");
        env::remove_var(PASSWORD_ENV);

        let config = ConfigBuilder::new()
            .with_config_file(&path)
            .with_config(Config {
                username: Some("override".into()),
                ..Default::default()
            })
            .build();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let config = config.unwrap();
        assert_eq!(config.root, Some(PathBuf::from("/srv/env")));
        assert_eq!(config.username.as_deref(), Some("override"));
        assert_eq!(config.password.as_deref(), Some("file-pw"));
    }

    #[test]
    fn test_build_settings() {
        let settings = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                root: Some(PathBuf::from("/srv/files")),
                ..credentials()
            })
            .build_settings()
            .unwrap();
        assert_eq!(settings.root(), Some(Path::new("/srv/files")));
        assert!(settings.credentials.matches("admin", "pw"));
    }
}
