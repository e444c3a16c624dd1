use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::load_calendar;

pub fn run(day_id: u8) -> Result<()> {
    let mut calendar = load_calendar()?;

    let Some(day) = calendar.day(day_id) else {
        anyhow::bail!("Day {} is not part of this calendar", day_id);
    };

    if !calendar.can_open(day) {
        let distance = day.km.map(|km| format!(" ({} km)", km)).unwrap_or_default();
        println!(
            "{}",
            format!("Day {} is already open{}.", day_id, distance).yellow()
        );
        return Ok(());
    }

    calendar.open(day_id);

    match calendar.day(day_id).and_then(|d| d.km) {
        Some(km) => println!("{}", format!("Day {}: run {} km!", day_id, km).green()),
        None => println!(
            "{}",
            format!(
                "Day {} opened, but no distance is assigned yet. Run `advent assign` first.",
                day_id
            )
            .yellow()
        ),
    }

    Ok(())
}
