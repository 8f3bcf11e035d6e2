//! Dogfinder - browse adoptable dogs, collect favorites and find a match
//!
//! This library wraps the adoption service's HTTP API and provides the
//! search, pagination, favorites and session workflows shared by the
//! command-line interface and the interactive dashboard.

use thiserror::Error;

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod favorites;
pub mod format;
pub mod logging;
pub mod models;
pub mod search;
pub mod session;
pub mod task;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DogfinderError {
    /// A call to the adoption service failed
    #[error("{0}")]
    ApiError(#[from] api::ApiError),
    /// Login was refused or the form did not validate
    #[error("{0}")]
    LoginError(#[from] auth::LoginError),
    /// Name or email did not validate
    #[error("{0}")]
    ValidationError(#[from] auth::ValidationError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Prompt error
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for dogfinder operations
pub type Result<T> = std::result::Result<T, DogfinderError>;
