//! Terminal rendering for calendar state.
//!
//! An extension trait adding colored output to advent-core types, plus the
//! helpers that lay the 24 slots out as a 6-column grid. The opened-today
//! emphasis lives here, not in the engine: it is a display concern.

use advent_core::AdventDay;
use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

const GRID_COLUMNS: usize = 6;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self, now: DateTime<Utc>) -> String;
}

impl Render for AdventDay {
    fn render(&self, now: DateTime<Utc>) -> String {
        let cell = cell_text(self);
        if !self.opened {
            cell.dimmed().to_string()
        } else if opened_today(self, now) {
            cell.bright_green().to_string()
        } else {
            cell.green().to_string()
        }
    }
}

/// Fixed-width cell content; colors are applied afterwards so the ANSI
/// codes never throw off the column padding.
fn cell_text(day: &AdventDay) -> String {
    let distance = match (day.opened, day.km) {
        (true, Some(km)) => format!("{:>2}km", km),
        (true, None) => "  --".to_string(),
        (false, _) => "  ··".to_string(),
    };
    format!("{:>2} {}", day.id, distance)
}

/// Render all 24 slots as a grid.
pub fn grid(days: &[AdventDay], now: DateTime<Utc>) -> String {
    let mut lines = Vec::new();
    for row in days.chunks(GRID_COLUMNS) {
        let cells: Vec<String> = row.iter().map(|d| d.render(now)).collect();
        lines.push(format!("  {}", cells.join("   ")));
    }
    lines.join("\n")
}

/// One-line progress summary shown under the grid.
pub fn summary(days: &[AdventDay]) -> String {
    let opened = days.iter().filter(|d| d.opened).count();
    let km_revealed: u32 = days
        .iter()
        .filter(|d| d.opened)
        .filter_map(|d| d.km)
        .map(u32::from)
        .sum();

    format!(
        "{} of {} boxes opened, {} km revealed",
        opened,
        days.len(),
        km_revealed
    )
}

/// Whether the box was opened on the same local calendar day as `now`.
pub fn opened_today(day: &AdventDay, now: DateTime<Utc>) -> bool {
    day.opened_at.is_some_and(|at| {
        at.with_timezone(&Local).date_naive() == now.with_timezone(&Local).date_naive()
    })
}
