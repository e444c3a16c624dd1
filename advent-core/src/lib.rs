//! Core state engine for a 24-box advent running calendar.
//!
//! This crate provides the game state and nothing else:
//! - `AdventDay`, the per-box entity
//! - `AdventCalendar`, the engine owning assignment, opening, reset,
//!   and write-through persistence
//! - `StateFile`, the JSON snapshot storage for the day collection
//! - `Settings`, the user preferences consumed by front ends
//!
//! Front ends (the `advent` CLI, or anything else) hold an
//! `AdventCalendar` instance, call its mutating operations, and read the
//! day collection back through `days()` / `day(id)`.

pub mod calendar;
pub mod day;
pub mod error;
pub mod settings;
pub mod store;

pub use calendar::{AdventCalendar, DAY_COUNT};
pub use day::AdventDay;
pub use error::{AdventError, AdventResult};
pub use settings::Settings;
pub use store::StateFile;
