//! # Logging Utilities
//!
//! Logging infrastructure for the fixture binaries using `tracing`.
//!
//! Console output always goes to **stderr**: the fixture's stdout is the
//! thing a coverage run compares, so log lines must never land there.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fixture_utils::init_logging;
//!
//! // Initialize with default settings (reads from RUST_LOG env var)
//! let _guard = init_logging().expect("Failed to initialize logging");
//!
//! tracing::warn!("Something looks off");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=foo=trace`)
//! - `FIXTURE_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `FIXTURE_LOG_FILE`: Optional path to log file (if not set, logs only to stderr)

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fmt as std_fmt, io};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "FIXTURE_LOG_FORMAT";

/// Environment variable holding an optional log file path.
pub const LOG_FILE_ENV: &str = "FIXTURE_LOG_FILE";

/// Level used when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_LEVEL: Level = Level::WARN;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default)
    #[default]
    Pretty,
    /// JSON format
    Json,
}

impl FromStr for LogFormat
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level (default)
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            )),
        }
    }
}

impl std_fmt::Display for LogLevel
{
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result
    {
        std_fmt::Display::fmt(&Level::from(*self), f)
    }
}

/// Keeps the non-blocking file writer alive.
///
/// Dropping it flushes and stops the background writer, so hold it until
/// the program exits.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct LoggingGuard
{
    file: Option<WorkerGuard>,
}

impl LoggingGuard
{
    /// Whether a file writer is attached.
    #[must_use]
    pub fn has_file(&self) -> bool
    {
        self.file.is_some()
    }
}

/// Initialize logging with default settings
///
/// Reads configuration from `RUST_LOG`, `FIXTURE_LOG_FORMAT` and
/// `FIXTURE_LOG_FILE`.
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - `FIXTURE_LOG_FORMAT` holds an unknown format
/// - File logging fails (if `FIXTURE_LOG_FILE` is set)
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    init_logging_internal(format_from_env()?, None)
}

/// Initialize logging with an explicit level and format
///
/// The explicit level takes precedence over `RUST_LOG`.
///
/// ```rust,no_run
/// use fixture_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized or file logging fails.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LoggingGuard, LoggingError>
{
    init_logging_internal(format, Some(level.into()))
}

/// Read the output format from `FIXTURE_LOG_FORMAT`, defaulting to pretty.
///
/// ## Errors
///
/// Returns [`LoggingError::InvalidFormat`] if the variable is set to an
/// unknown format.
pub fn format_from_env() -> Result<LogFormat, LoggingError>
{
    match env::var(LOG_FORMAT_ENV) {
        Ok(value) => value.parse().map_err(LoggingError::InvalidFormat),
        Err(_) => Ok(LogFormat::default()),
    }
}

fn init_logging_internal(format: LogFormat, explicit_level: Option<Level>) -> Result<LoggingGuard, LoggingError>
{
    let mut layers: Vec<BoxedLayer> = vec![console_layer(format, build_filter(explicit_level))];

    let mut guard = LoggingGuard::default();
    if let Some(file_path) = env::var(LOG_FILE_ENV).ok().map(PathBuf::from) {
        let (dir, file_name) = split_log_path(&file_path)?;
        std::fs::create_dir_all(&dir)?;

        let file_appender = tracing_appender::rolling::daily(dir, file_name);
        let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
        guard.file = Some(worker);

        let file_layer = match format {
            LogFormat::Pretty => fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false) // No ANSI in files
                .with_filter(build_filter(explicit_level))
                .boxed(),
            LogFormat::Json => fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(build_filter(explicit_level))
                .boxed(),
        };
        layers.push(file_layer);
    }

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;

    Ok(guard)
}

fn console_layer(format: LogFormat, filter: EnvFilter) -> BoxedLayer
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true)
            .with_writer(io::stderr)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(io::stderr)
            .with_filter(filter)
            .boxed(),
    }
}

/// Build the level filter.
///
/// Priority:
/// 1. An explicit level (from the `--log-level` CLI flag)
/// 2. `RUST_LOG` (supports module-specific filters like `foo=trace`)
/// 3. [`DEFAULT_LEVEL`]
fn build_filter(explicit_level: Option<Level>) -> EnvFilter
{
    match explicit_level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL.to_string())),
    }
}

/// Split a log file path into the directory and file name handed to the appender.
fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf), LoggingError>
{
    let file_name = path.file_name().ok_or_else(|| {
        LoggingError::FileError(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log file path has no file name: {}", path.display()),
        ))
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, PathBuf::from(file_name)))
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}
