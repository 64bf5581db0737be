//! Configured entry point to the Tally utilities

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::Result;
use tally::{JoinFormat, PrefixedLinePrinter};

use crate::{ConfigLoader, TallyConfig};

/// Printer and joiner built from a loaded [`TallyConfig`].
///
/// # Example
///
/// ```
/// use tally_config::{TallyConfig, Toolkit};
///
/// let mut config = TallyConfig::default();
/// config.printer.prefix = "P".to_string();
/// config.join.separator = "-".to_string();
///
/// let toolkit = Toolkit::new(config);
/// assert_eq!(toolkit.join([1, 2, 3]), "1-2-3");
///
/// let mut out = Vec::new();
/// toolkit.print_to(&mut out, ["x", "y"]).unwrap();
/// assert_eq!(out, b"P x\nP y\n");
/// ```
#[derive(Debug, Clone)]
pub struct Toolkit {
    config: TallyConfig,
    join: JoinFormat,
}

impl Toolkit {
    pub fn new(config: TallyConfig) -> Self {
        let join = config.join.to_format();
        Self { config, join }
    }

    /// Load configuration from the default locations and start logging
    pub fn load() -> Result<Self> {
        Self::from_loader(ConfigLoader::new())
    }

    /// Load through `loader` and start logging with its `logging.filter`
    pub fn from_loader(loader: ConfigLoader) -> Result<Self> {
        let config = loader.load()?;
        config.init_logging();
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    pub fn printer<W: Write>(&self, writer: W) -> PrefixedLinePrinter<W> {
        self.config.printer.printer(writer)
    }

    /// Write `lines` to `writer` with the configured prefix
    pub fn print_to<W, I, S>(&self, writer: W, lines: I) -> tally::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.printer(writer).print_all(lines)
    }

    /// Print `lines` to stdout with the configured prefix
    pub fn print<I, S>(&self, lines: I) -> tally::Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.print_to(io::stdout().lock(), lines)
    }

    /// Join `items` with the configured separator and affixes
    pub fn join<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.join.join(items)
    }
}
