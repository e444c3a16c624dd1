use advent_core::{Settings, StateFile};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(allow_duplicates: Option<bool>) -> Result<()> {
    let config_path = Settings::config_path().context("Could not locate the config file")?;
    let state_file = StateFile::default_path().context("Could not locate the state file")?;

    let mut settings = Settings::load().context("Failed to load settings")?;

    if let Some(value) = allow_duplicates {
        settings.allow_duplicates = value;
        settings.save().context("Failed to save settings")?;
        println!("{}", format!("allow_duplicates set to {}", value).green());
        println!();
    }

    println!("{}", "Settings".bold());
    println!("  allow_duplicates: {}", settings.allow_duplicates);
    println!();
    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  State:   {}", state_file.path().display());

    Ok(())
}
