//! Durable storage for the day collection.
//!
//! The whole calendar is persisted as a single JSON snapshot under a fixed
//! path. Every write replaces the previous snapshot; there is no partial
//! update and no migration logic, so field names are load-bearing.

use std::path::{Path, PathBuf};

use crate::day::AdventDay;
use crate::error::{AdventError, AdventResult};

const STATE_FILE: &str = "days.json";

/// Handle to the JSON snapshot file holding all 24 days.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// State file in the platform data directory
    /// (e.g. `~/.local/share/advent/days.json`).
    pub fn default_path() -> AdventResult<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| AdventError::Config("Could not determine data directory".into()))?
            .join("advent");

        Ok(StateFile {
            path: dir.join(STATE_FILE),
        })
    }

    /// State file at an explicit location (tests and tooling).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        StateFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted day collection.
    pub fn load(&self) -> AdventResult<Vec<AdventDay>> {
        let json = std::fs::read_to_string(&self.path)?;
        let days = serde_json::from_str(&json)?;
        Ok(days)
    }

    /// Write the full day collection as one snapshot.
    ///
    /// Writes to a temp file first, then renames over the target, so a
    /// crashed write never leaves a half-written state file behind.
    pub fn save(&self, days: &[AdventDay]) -> AdventResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(days)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
