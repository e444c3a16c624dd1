use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::commands::load_calendar;

pub fn run(allow_duplicates: bool, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Reassign all distances and clear every opened box? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Reset cancelled.".dimmed());
            return Ok(());
        }
    }

    let mut calendar = load_calendar()?;
    calendar.reset(allow_duplicates);

    println!(
        "{}",
        "Calendar reset. All 24 boxes are closed again.".green()
    );

    Ok(())
}
