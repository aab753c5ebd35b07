//! # Commands
//!
//! The closed set of branches the dispatcher can take, parsed from the
//! first character of the selector argument.

use std::io::Write;

use crate::error::Result;

/// A dispatcher branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command
{
    /// `'1'`: print the counter result
    Count,
    /// `'2'`: print the alternate counter result
    Alternate,
    /// `'3'`: print the greeting
    Greet,
    /// Anything else, including an empty selector: do nothing
    Unknown,
}

impl From<&str> for Command
{
    fn from(selector: &str) -> Self
    {
        match selector.chars().next() {
            Some('1') => Command::Count,
            Some('2') => Command::Alternate,
            Some('3') => Command::Greet,
            _ => Command::Unknown,
        }
    }
}

impl Command
{
    /// Run the branch, writing its output to `out`.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::error::BarError::Io`] if writing to `out` fails.
    pub fn execute<W: Write>(self, out: &mut W) -> Result<()>
    {
        match self {
            Command::Count => writeln!(out, "{}", foo::foo())?,
            Command::Alternate => writeln!(out, "{}", foo::bar())?,
            Command::Greet => header::write_greeting(out)?,
            Command::Unknown => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn output_of(command: Command) -> String
    {
        let mut out = Vec::new();
        command.execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_by_first_character()
    {
        assert_eq!(Command::from("1"), Command::Count);
        assert_eq!(Command::from("2"), Command::Alternate);
        assert_eq!(Command::from("3"), Command::Greet);
        assert_eq!(Command::from("1abc"), Command::Count);
        assert_eq!(Command::from("31"), Command::Greet);
    }

    #[test]
    fn test_parse_unknown()
    {
        assert_eq!(Command::from("9"), Command::Unknown);
        assert_eq!(Command::from("x"), Command::Unknown);
        assert_eq!(Command::from(""), Command::Unknown);
        assert_eq!(Command::from(" 1"), Command::Unknown);
    }

    #[test]
    fn test_execute_outputs()
    {
        assert_eq!(output_of(Command::Count), "10\n");
        assert_eq!(output_of(Command::Alternate), "10\n");
        assert_eq!(output_of(Command::Greet), "Hello World\n");
        assert_eq!(output_of(Command::Unknown), "");
    }
}
