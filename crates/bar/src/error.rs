//! # Error Types
//!
//! Errors the dispatcher can report. Every branch of the dispatcher itself
//! succeeds; these cover the surrounding plumbing.

use fixture_utils::LoggingError;
use thiserror::Error;

/// Main error type for the `bar` binary
#[derive(Error, Debug)]
pub enum BarError
{
    /// No selector was supplied while `--require-arg` was set
    #[error("missing argument: expected a selector such as 1, 2 or 3")]
    MissingArgument,

    /// Writing the branch output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be set up
    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Result alias for dispatcher operations
pub type Result<T> = std::result::Result<T, BarError>;
