//! User settings.
//!
//! Stored at `~/.config/advent/config.toml`, separately from the calendar
//! state. The engine never reads these; front ends load them and pass the
//! relevant flags into its operations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AdventError, AdventResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Allow the same distance on more than one day when assigning.
    #[serde(default)]
    pub allow_duplicates: bool,
}

impl Settings {
    pub fn config_path() -> AdventResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdventError::Config("Could not determine config directory".into()))?
            .join("advent");

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings, falling back to defaults when no config file exists.
    pub fn load() -> AdventResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> AdventResult<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AdventError::Config(e.to_string()))
    }

    /// Save the current settings to the config file.
    pub fn save(&self) -> AdventResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> AdventResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AdventError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file_exists() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(!settings.allow_duplicates);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let settings = Settings {
            allow_duplicates: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# nothing set yet\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(!settings.allow_duplicates);
    }

    #[test]
    fn rejects_malformed_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "allow_duplicates = \"maybe\"\n").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }
}
