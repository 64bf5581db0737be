//! Prefixed line output.
//!
//! Every input string becomes exactly one output line of the form
//! `"<prefix> <line>\n"`, written in input order. The separating space is
//! always present, even when the prefix is empty.

use std::io::{self, Write};

use crate::Result;

/// Formats a single prefixed line without the trailing newline.
///
/// ```
/// assert_eq!(tally::format_prefixed("P", "x"), "P x");
/// assert_eq!(tally::format_prefixed("", "x"), " x");
/// ```
pub fn format_prefixed(prefix: &str, line: &str) -> String {
    format!("{prefix} {line}")
}

/// Writes prefixed lines to an underlying writer.
#[derive(Debug)]
pub struct PrefixedLinePrinter<W> {
    writer: W,
    prefix: String,
}

impl<W: Write> PrefixedLinePrinter<W> {
    pub fn new(writer: W, prefix: impl Into<String>) -> Self {
        Self {
            writer,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Writes one line per item and returns how many lines were written.
    ///
    /// Stops at the first write error; lines already written stay written.
    pub fn print_all<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut written = 0;
        for line in lines {
            writeln!(self.writer, "{} {}", self.prefix, line.as_ref())?;
            written += 1;
        }
        self.writer.flush()?;

        tracing::trace!(prefix = %self.prefix, written, "printed prefixed lines");
        Ok(written)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Prints each line to standard output with the given prefix.
pub fn print_with_prefix<I, S>(lines: I, prefix: &str) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    let mut printer = PrefixedLinePrinter::new(stdout.lock(), prefix);
    printer.print_all(lines)?;
    Ok(())
}
