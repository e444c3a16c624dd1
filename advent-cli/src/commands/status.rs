use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;

use crate::commands::load_calendar;
use crate::render;

pub fn run() -> Result<()> {
    let calendar = load_calendar()?;
    let days = calendar.days();

    println!();
    println!("{}", render::grid(days, Utc::now()));
    println!();
    println!("  {}", render::summary(days).dimmed());

    if days.iter().all(|d| d.km.is_none()) {
        println!();
        println!(
            "  {}",
            "No distances assigned yet. Run `advent assign` to fill the boxes.".yellow()
        );
    }

    Ok(())
}
