//! Layered configuration loading

use crate::{Paths, TallyConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Merges defaults, the user file, the project files and the environment.
///
/// Later layers win: defaults < user file < `tally.toml` <
/// `tally.local.toml` < `<PREFIX>_*` variables. Missing files are skipped.
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config_file: Option<PathBuf>,
    env_vars: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    /// Loader rooted at the current directory, reading `TALLY_*` variables
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "TALLY".to_string(),
            user_config_file: None,
            env_vars: None,
        }
    }

    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Use `path` as the user layer instead of the XDG location
    pub fn with_user_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.user_config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read variables from `vars` instead of the process environment
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    pub fn load(self) -> Result<TallyConfig> {
        let user_file = self
            .user_config_file
            .or_else(|| Paths::user_config_file().ok());
        let files = user_file
            .into_iter()
            .chain(Paths::project_files(&self.project_dir));

        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&TallyConfig::default())?);

        for file in files.filter(|file| file.is_file()) {
            builder = builder.add_source(config::File::from(file).format(config::FileFormat::Toml));
        }

        // Keys are single words, so "_" is unambiguous as a separator
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .separator("_")
                .source(self.env_vars),
        );

        let tally_config: TallyConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        tally_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(tally_config)
    }

    /// Load configuration or fall back to defaults on any error
    pub fn load_or_default(self) -> TallyConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
