use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::load_calendar;

pub fn run(allow_duplicates: bool) -> Result<()> {
    let mut calendar = load_calendar()?;
    calendar.assign_km(allow_duplicates);

    let mode = if allow_duplicates {
        "repeats allowed"
    } else {
        "all unique"
    };
    println!(
        "{}",
        format!("Assigned distances to all 24 boxes ({}).", mode).green()
    );

    Ok(())
}
