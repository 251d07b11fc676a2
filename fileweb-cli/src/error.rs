//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;
use fileweb::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// No username or password was given.
    MissingCredentials,

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Nothing selected, or nothing valid selected
    /// - 2: Authentication failed
    /// - 3: File root not configured
    /// - 4: Path not found
    /// - 5: I/O error, including files that became unreadable
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::EmptySelection | LibError::NoValidSelection => 1,
                LibError::NotAuthenticated | LibError::InvalidCredentials => 2,
                LibError::NotConfigured { .. } => 3,
                LibError::NotFound { .. } | LibError::PathNotFound { .. } => 4,
                LibError::TransientReadFailure { .. } | LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::Validation { .. } => 7,
                _ => 6,
            },
            CliError::MissingCredentials => 2,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::MissingCredentials => write!(
                f,
                "authentication required (use --user and --password, or {} and {})",
                crate::cli::LOGIN_USER_ENV,
                crate::cli::LOGIN_PASSWORD_ENV
            ),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(LibError::EmptySelection).exit_code(), 1);
        assert_eq!(CliError::from(LibError::NoValidSelection).exit_code(), 1);
        assert_eq!(CliError::from(LibError::InvalidCredentials).exit_code(), 2);
        assert_eq!(CliError::MissingCredentials.exit_code(), 2);
        assert_eq!(
            CliError::from(LibError::NotConfigured { root: None }).exit_code(),
            3
        );
        assert_eq!(CliError::from(LibError::not_found("x")).exit_code(), 4);
        assert_eq!(
            CliError::from(std::io::Error::other("disk full")).exit_code(),
            5
        );
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);
    }

    #[test]
    fn test_transient_failure_is_io() {
        let err = LibError::TransientReadFailure {
            path: "a.txt".into(),
            source: std::io::Error::other("gone"),
        };
        assert_eq!(CliError::from(err).exit_code(), 5);
    }

    #[test]
    fn test_library_message_passes_through() {
        let err = CliError::from(LibError::not_found("../etc/passwd"));
        assert_eq!(err.to_string(), "not found: ../etc/passwd");
    }
}
