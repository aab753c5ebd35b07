//! # header
//!
//! Greeter function for the coverage fixture.

use std::io::{self, Write};

use tracing::trace;

/// The fixed greeting written by [`header_func`].
pub const GREETING: &str = "Hello World";

/// Print the greeting followed by a newline to standard output.
///
/// Write failures on stdout are not handled here. Use [`write_greeting`]
/// when the caller needs to observe them.
pub fn header_func()
{
    let _ = write_greeting(&mut io::stdout().lock());
}

/// Write the greeting followed by a newline to `out`.
///
/// ## Errors
///
/// Returns any error produced by the underlying writer.
pub fn write_greeting<W: Write>(out: &mut W) -> io::Result<()>
{
    trace!("writing greeting");
    writeln!(out, "{GREETING}")
}
