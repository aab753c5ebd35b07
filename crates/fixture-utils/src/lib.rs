//! # Fixture Utilities
//!
//! Shared helpers for the coverage fixture workspace.
//!
//! Currently this is the logging setup built on `tracing`, shared by the
//! `bar` binary and anything else in the workspace that needs to log.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{
    format_from_env, init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError, LoggingGuard,
};
pub use tracing::{debug, error, info, trace, warn};
