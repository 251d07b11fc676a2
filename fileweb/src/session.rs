//! Session gating and credential login.
//!
//! A session carries a single flag: whether its holder has logged in with the
//! shared credentials. The [`SessionGate`] trait abstracts over where that
//! flag lives so a web front end can back it with its own session store,
//! while [`MemorySession`] keeps it in memory for the CLI and tests.

use crate::config::Settings;
use crate::error::{Error, Result};

/// Storage for a session's authentication flag.
pub trait SessionGate {
    /// Whether the session has logged in.
    fn is_authenticated(&self) -> bool;

    /// Set or reset the authentication flag.
    fn set_authenticated(&mut self, authenticated: bool);

    /// Drop everything held by the session.
    fn clear(&mut self);
}

/// A session held in process memory.
///
/// # Examples
///
/// ```
/// use fileweb::session::{MemorySession, SessionGate};
///
/// let mut session = MemorySession::new();
/// assert!(!session.is_authenticated());
///
/// session.set_authenticated(true);
/// assert!(session.is_authenticated());
///
/// session.clear();
/// assert!(!session.is_authenticated());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySession {
    authenticated: bool,
}

impl MemorySession {
    /// Create an unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionGate for MemorySession {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Checks credentials against the configured ones and flips the session
/// flag accordingly.
///
/// # Examples
///
/// ```no_run
/// use fileweb::config::{Credentials, Settings};
/// use fileweb::session::{Authenticator, MemorySession, SessionGate};
///
/// let settings = Settings::new(
///     Some("/srv/files".into()),
///     Credentials::new("admin", "hunter2"),
/// );
/// let auth = Authenticator::new(&settings);
/// let mut session = MemorySession::new();
///
/// assert!(auth.login(&mut session, "admin", "wrong").is_err());
/// auth.login(&mut session, "admin", "hunter2").unwrap();
/// assert!(session.is_authenticated());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Authenticator<'a> {
    settings: &'a Settings,
}

impl<'a> Authenticator<'a> {
    /// Create an authenticator for the given settings.
    #[must_use]
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Log a session in.
    ///
    /// A session that is already authenticated stays so without checking
    /// anything. Otherwise the credentials must match and the root directory
    /// must be usable before the session is marked as authenticated.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCredentials`] if the username or password is wrong
    /// - [`Error::NotConfigured`] if the credentials are right but the root
    ///   is unset or missing; the session stays logged out
    pub fn login<S: SessionGate + ?Sized>(
        &self,
        session: &mut S,
        username: &str,
        password: &str,
    ) -> Result<()> {
        if session.is_authenticated() {
            log::debug!("session already authenticated");
            return Ok(());
        }

        if !self.settings.credentials.matches(username, password) {
            log::debug!("login rejected for user '{username}'");
            return Err(Error::InvalidCredentials);
        }

        self.settings.resolver()?;

        session.set_authenticated(true);
        log::debug!("user '{username}' logged in");
        Ok(())
    }

    /// Log a session out, discarding everything it holds.
    pub fn logout<S: SessionGate + ?Sized>(&self, session: &mut S) {
        session.clear();
    }

    /// Fail unless the session has logged in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] for a session that has not logged in.
    pub fn require_authenticated<S: SessionGate + ?Sized>(session: &S) -> Result<()> {
        if session.is_authenticated() {
            Ok(())
        } else {
            Err(Error::NotAuthenticated)
        }
    }
}
