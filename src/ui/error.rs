//! Dashboard errors

use thiserror::Error;

/// Failure to drive the terminal while the dashboard is open
#[derive(Debug, Error)]
pub enum UiError {
    /// Raw mode, the alternate screen or a draw call failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;
