//! Error handling module for the erato CLI.
//!
//! Wraps core sieve errors and the failures of the CLI's own I/O
//! (configuration file, logging setup, writing results).

use erato_sieve::SieveError;
use thiserror::Error;

/// Main error type for the erato CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the sieve itself.
    #[error(transparent)]
    Sieve(#[from] SieveError),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
