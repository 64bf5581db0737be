//! Configuration management for Tally
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (TALLY_* prefix, highest precedence)
//! 2. tally.local.toml (gitignored, local overrides)
//! 3. tally.toml (git-tracked, project config)
//! 4. ~/.config/tally/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! [`Toolkit`] turns a loaded configuration into a ready printer and joiner.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use tally::{JoinFormat, PrefixedLinePrinter};

mod error;
mod loader;
mod paths;
mod toolkit;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::{PROJECT_FILE_NAMES, Paths};
pub use toolkit::Toolkit;

/// Main Tally configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub printer: PrinterConfig,
    pub join: JoinConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub prefix: String,
}

impl PrinterConfig {
    /// Build a printer over `writer` using the configured prefix
    pub fn printer<W: Write>(&self, writer: W) -> PrefixedLinePrinter<W> {
        PrefixedLinePrinter::new(writer, self.prefix.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    pub separator: String,
    pub prefix: String,
    pub postfix: String,
}

impl Default for JoinConfig {
    fn default() -> Self {
        let format = JoinFormat::default();
        Self {
            separator: format.separator,
            prefix: format.prefix,
            postfix: format.postfix,
        }
    }
}

impl JoinConfig {
    pub fn to_format(&self) -> JoinFormat {
        JoinFormat::default()
            .with_separator(self.separator.as_str())
            .with_prefix(self.prefix.as_str())
            .with_postfix(self.postfix.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: tally::logging::DEFAULT_FILTER.to_string(),
        }
    }
}

impl TallyConfig {
    /// Read a single TOML file without layering or environment overrides
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Install the global tracing subscriber using `logging.filter`
    pub fn init_logging(&self) -> bool {
        tally::logging::init(&self.logging.filter)
    }
}
