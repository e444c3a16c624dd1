//! CLI subcommands.

pub mod assign;
pub mod config;
pub mod open;
pub mod reset;
pub mod status;

use advent_core::{AdventCalendar, StateFile};
use anyhow::{Context, Result};

/// Open the calendar backed by the default state file.
pub fn load_calendar() -> Result<AdventCalendar> {
    let store = StateFile::default_path().context("Could not locate the state file")?;
    Ok(AdventCalendar::load(store))
}
