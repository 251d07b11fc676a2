//! Configuration system for fileweb.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! The validated [`Config`] is turned into immutable [`Settings`], which the
//! rest of the library receives explicitly.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FILEWEB_ROOT`, `FILEWEB_USERNAME`,
//!    `FILEWEB_PASSWORD`, `FILEWEB_OUTPUT_FORMAT`)
//! 3. Configuration file (`--config` path, or `~/.fileweb/config.yaml`)
//! 4. Built-in defaults (nothing set)
//!
//! # Examples
//!
//! ```no_run
//! use fileweb::config::ConfigBuilder;
//!
//! let settings = ConfigBuilder::new()
//!     .build_settings()
//!     .unwrap();
//!
//! println!("Serving {:?}", settings.root());
//! ```
//!
//! Loading from a specific file:
//!
//! ```no_run
//! use fileweb::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_config_file(Path::new("/etc/fileweb.yaml"))
//!     .build()
//!     .unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod settings;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use settings::{Credentials, Settings};
pub use validator::ConfigValidator;
