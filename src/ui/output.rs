//! Output abstraction layer
//!
//! Every user-facing message, whether it comes from a failed HTTP call or a
//! workflow that could not complete, goes through [`Notifier`] with a
//! [`Severity`]. The CLI prints immediately; the dashboard buffers messages
//! in a [`StatusBarWriter`] and lets them expire.

use colored::Colorize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Plain message
    Normal,
    /// Secondary information
    Info,
    /// Completed operation
    Success,
    /// Something the user should look at
    Warning,
    /// Failed operation
    Error,
}

/// Single reporting interface for the whole crate
///
/// # Examples
///
/// ```
/// use dogfinder::ui::output::{Notifier, Severity, StatusBarWriter};
///
/// let writer = StatusBarWriter::new();
/// writer.notify(Severity::Error, "Something went wrong");
/// writer.success("Done");
/// assert_eq!(writer.message_count(), 2);
/// ```
pub trait Notifier: Send + Sync {
    /// Report a message at the given severity
    fn notify(&self, severity: Severity, message: &str);

    /// Drop all pending messages (no-op for streaming writers)
    fn clear(&self);

    /// Report a result line
    fn write(&self, message: &str) {
        self.notify(Severity::Normal, message);
    }

    /// Report a failed operation
    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    /// Report a completed operation
    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    /// Report something the user should look at
    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    /// Report progress or other secondary information
    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }
}

/// Immediate writer for the CLI
///
/// Errors and warnings go to stderr so they never mix with piped results.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Writer that prints every severity
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a writer that only prints errors and normal output
    #[must_use]
    pub const fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for StdoutWriter {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Normal => println!("{message}"),
            Severity::Error => eprintln!("{} {}", "❌".red(), message),
            Severity::Success if !self.quiet => println!("{} {}", "✓".green(), message),
            Severity::Warning if !self.quiet => eprintln!("{} {}", "⚠️".yellow(), message),
            Severity::Info if !self.quiet => println!("{}", message.dimmed()),
            Severity::Success | Severity::Warning | Severity::Info => {}
        }
    }

    fn clear(&self) {
        // Printed lines cannot be taken back
    }
}

type Entry = (Severity, String, Instant);

/// Buffered writer behind the dashboard status bar
///
/// Messages expire after the configured TTL, which gives the dashboard its
/// auto-dismissing notifications.
#[derive(Clone)]
pub struct StatusBarWriter {
    messages: Arc<Mutex<Vec<Entry>>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Default lifetime of a notification
    pub const DEFAULT_TTL: Duration = Duration::from_millis(3000);

    /// Create a new status bar writer with the default TTL
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Self::DEFAULT_TTL)
    }

    /// Writer whose messages live for `ttl`
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, Vec<Entry>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get messages that have not expired yet, oldest first
    #[must_use]
    pub fn recent_messages(&self) -> Vec<(Severity, String)> {
        let now = Instant::now();
        self.entries()
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
            .collect()
    }

    /// Get the most recent live message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(Severity, String)> {
        let now = Instant::now();
        self.entries()
            .iter()
            .rev()
            .find(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
    }

    /// Number of live messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        let now = Instant::now();
        self.entries()
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .count()
    }

    /// Drop expired messages
    pub fn cleanup(&self) {
        let now = Instant::now();
        let ttl = self.ttl;
        self.entries()
            .retain(|(_, _, time)| now.duration_since(*time) < ttl);
    }

    fn add_message(&self, level: Severity, message: String) {
        let mut messages = self.entries();
        messages.push((level, message, Instant::now()));

        // Bounded; the status bar only ever shows the newest
        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for StatusBarWriter {
    fn notify(&self, severity: Severity, message: &str) {
        self.add_message(severity, message.to_string());
    }

    fn clear(&self) {
        self.entries().clear();
    }
}
