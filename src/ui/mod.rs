//! Presentation layer
//!
//! - [`output`]: the [`Notifier`] interface with a stdout writer for the CLI
//!   and a TTL-buffered writer for status bars
//! - [`input`]: text prompts behind [`UserInput`]
//! - [`dashboard`]: the interactive ratatui view
//!
//! ```
//! use dogfinder::ui::output::{Notifier, StatusBarWriter};
//! use std::time::Duration;
//!
//! let writer = StatusBarWriter::with_ttl(Duration::from_secs(5));
//! writer.success("Added Rex to favorites");
//! writer.error("API Error: 500 Internal Server Error on GET /dogs/breeds");
//!
//! for (severity, message) in writer.recent_messages() {
//!     println!("{severity:?}: {message}");
//! }
//! ```

mod error;

pub mod dashboard;
pub mod input;
pub mod output;

pub use error::{Result, UiError};
pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{Notifier, Severity, StatusBarWriter, StdoutWriter};
