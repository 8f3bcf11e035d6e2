//! Process-wide session state
//!
//! [`SessionStore`] owns the authenticated flag and the transient
//! notification ("snackbar") message. It is created once, shared as
//! `Arc<SessionStore>` and handed to every component that reads or writes
//! it. Each workflow mutates it from one task at a time, so plain atomics and
//! a mutex-backed message buffer are enough.

use crate::ui::output::{Notifier, Severity, StatusBarWriter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Shared session state with explicit setters
pub struct SessionStore {
    authenticated: AtomicBool,
    user: Mutex<Option<String>>,
    snackbar: StatusBarWriter,
    echo: Option<Arc<dyn Notifier>>,
}

impl SessionStore {
    /// Create a logged-out store whose notifications expire after `ttl`
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            authenticated: AtomicBool::new(false),
            user: Mutex::new(None),
            snackbar: StatusBarWriter::with_ttl(ttl),
            echo: None,
        }
    }

    /// Also forward every notification to `writer` as it arrives
    ///
    /// The CLI uses this to print messages immediately instead of only
    /// buffering them for a status bar.
    #[must_use]
    pub fn with_echo(mut self, writer: Arc<dyn Notifier>) -> Self {
        self.echo = Some(writer);
        self
    }

    /// Whether a login succeeded and no logout happened since
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Set the authenticated flag
    pub fn set_logged_in(&self, status: bool) {
        self.authenticated.store(status, Ordering::SeqCst);
        if !status {
            *self.user.lock().unwrap_or_else(PoisonError::into_inner) = None;
        }
    }

    /// Mark the session as authenticated for `name`
    pub fn login(&self, name: &str) {
        *self.user.lock().unwrap_or_else(PoisonError::into_inner) = Some(name.to_string());
        self.authenticated.store(true, Ordering::SeqCst);
    }

    /// Mark the session as logged out
    pub fn logout(&self) {
        self.set_logged_in(false);
    }

    /// Display name of the logged-in user
    #[must_use]
    pub fn user(&self) -> Option<String> {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Dismiss the current notification
    pub fn hide_notification(&self) {
        self.snackbar.clear();
    }

    /// The current notification, if one is still live
    #[must_use]
    pub fn notification(&self) -> Option<(Severity, String)> {
        self.snackbar.latest_message()
    }

    /// Drop expired notifications
    pub fn expire_notifications(&self) {
        self.snackbar.cleanup();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(StatusBarWriter::DEFAULT_TTL)
    }
}

impl Notifier for SessionStore {
    fn notify(&self, severity: Severity, message: &str) {
        self.snackbar.notify(severity, message);
        if let Some(echo) = &self.echo {
            echo.notify(severity, message);
        }
    }

    fn clear(&self) {
        self.hide_notification();
    }
}
