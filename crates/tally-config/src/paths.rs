//! Where configuration files live

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File names of the project-level layers, lowest precedence first
pub const PROJECT_FILE_NAMES: [&str; 2] = ["tally.toml", "tally.local.toml"];

pub struct Paths;

impl Paths {
    /// User defaults file (`~/.config/tally/config.toml` on Linux)
    pub fn user_config_file() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("rs", "Tally", "tally")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or_else(|| {
                ConfigError::XdgError("Failed to determine user config directory".to_string())
            })
    }

    /// `tally.toml` then `tally.local.toml` inside `project_dir`
    pub fn project_files(project_dir: impl AsRef<Path>) -> [PathBuf; 2] {
        PROJECT_FILE_NAMES.map(|name| project_dir.as_ref().join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_file_is_namespaced() {
        // Not every environment has a home directory
        if let Ok(file) = Paths::user_config_file() {
            assert!(file.to_string_lossy().contains("tally"));
            assert!(file.ends_with("config.toml"));
        }
    }

    #[test]
    fn project_files_in_precedence_order() {
        let [project, local] = Paths::project_files("/work/repo");
        assert_eq!(project, Path::new("/work/repo/tally.toml"));
        assert_eq!(local, Path::new("/work/repo/tally.local.toml"));
    }
}
