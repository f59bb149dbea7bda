//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>` so failures propagate
//! with `?` up to [`crate::run`], which maps them to exit codes.

use cabo_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdin reads, stdout/stderr writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine rejected an operation
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    /// Operation was interrupted (e.g. stdin closed mid-game)
    #[error("Interrupted: {0}")]
    Interrupted(String),
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(error))
    }
}
