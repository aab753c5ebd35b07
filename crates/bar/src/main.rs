use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fixture_utils::{debug, format_from_env, init_logging, init_logging_with_level, warn, LogLevel, LoggingGuard};

mod command;
mod error;

use command::Command;
use error::{BarError, Result};

/// Argument-driven dispatcher for the coverage fixture.
#[derive(Parser, Debug)]
#[command(name = "bar")]
#[command(version)]
#[command(about = "Dispatch to a counter or greeter based on the first character of SELECTOR", long_about = None)]
struct Cli
{
    /// Branch selector; only its first character is read (1: count, 2: alternate count, 3: greet)
    selector: Option<String>,
    /// Treat a missing selector as an error instead of printing "Zero arg"
    #[arg(long, default_value_t = false)]
    require_arg: bool,
    /// Log level (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn main() -> ExitCode
{
    let cli = Cli::parse();

    // Held until exit so the file writer (if any) gets flushed
    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(cli.selector.as_deref(), cli.require_arg, &mut out).and_then(|()| out.flush().map_err(BarError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<LoggingGuard>
{
    let guard = match cli.log_level {
        Some(level) => init_logging_with_level(level, format_from_env()?)?,
        None => init_logging()?,
    };
    debug!(file_output = guard.has_file(), "logging initialized");
    Ok(guard)
}

/// Dispatch on `selector`, writing the branch output to `out`.
fn run<W: Write>(selector: Option<&str>, require_arg: bool, out: &mut W) -> Result<()>
{
    let Some(selector) = selector else {
        if require_arg {
            warn!("no selector supplied");
            return Err(BarError::MissingArgument);
        }
        writeln!(out, "Zero arg")?;
        return Ok(());
    };

    let command = Command::from(selector);
    debug!(?command, selector, "dispatching");
    command.execute(out)
}

#[cfg(test)]
mod tests
{
    use clap::CommandFactory;

    use super::*;

    fn run_to_string(selector: Option<&str>, require_arg: bool) -> Result<String>
    {
        let mut out = Vec::new();
        run(selector, require_arg, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_definition()
    {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_selector_and_flags()
    {
        let cli = Cli::try_parse_from(["bar", "--require-arg", "--log-level", "debug", "3"]).unwrap();
        assert_eq!(cli.selector.as_deref(), Some("3"));
        assert!(cli.require_arg);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));

        let cli = Cli::try_parse_from(["bar"]).unwrap();
        assert!(cli.selector.is_none());
        assert!(!cli.require_arg);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_log_level()
    {
        assert!(Cli::try_parse_from(["bar", "--log-level", "loud", "1"]).is_err());
    }

    #[test]
    fn test_run_branches()
    {
        assert_eq!(run_to_string(Some("1"), false).unwrap(), "10\n");
        assert_eq!(run_to_string(Some("2"), false).unwrap(), "10\n");
        assert_eq!(run_to_string(Some("3"), false).unwrap(), "Hello World\n");
        assert_eq!(run_to_string(Some("9"), false).unwrap(), "");
    }

    #[test]
    fn test_run_zero_arg()
    {
        assert_eq!(run_to_string(None, false).unwrap(), "Zero arg\n");
    }

    #[test]
    fn test_run_require_arg()
    {
        let err = run_to_string(None, true).unwrap_err();
        assert!(matches!(err, BarError::MissingArgument));

        // A present selector is unaffected by the flag
        assert_eq!(run_to_string(Some("1"), true).unwrap(), "10\n");
    }
}
