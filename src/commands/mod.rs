//! Command implementations
//!
//! Each command is a module with an `execute` function that takes parsed CLI
//! args and runs the operation against the service. Results are written as
//! [`Severity::Normal`](crate::ui::Severity::Normal) messages so they survive
//! quiet mode; everything else is informational.

pub mod breeds;
pub mod browse;
pub mod completions;
pub mod config;
pub mod dogs;
pub mod locations;
pub mod login;
pub mod matching;
pub mod search;

// Re-export execute functions for convenience
pub use breeds::execute as breeds;
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use self::config::execute as config;
pub use dogs::execute as dogs;
pub use locations::execute as locations;
pub use login::execute as login;
pub use matching::execute as matching;
pub use search::execute as search;
