//! The advent calendar state engine.
//!
//! `AdventCalendar` owns the 24 `AdventDay`s and the snapshot store. It is
//! the sole mutator of day state: front ends call `assign_km`, `open`, and
//! `reset`, and read the result back through `days()` / `day(id)`. Every
//! mutation writes the full collection straight through to the store.

use std::io::ErrorKind;

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::day::AdventDay;
use crate::error::AdventError;
use crate::store::StateFile;

/// Number of boxes in the calendar.
pub const DAY_COUNT: u8 = 24;

pub struct AdventCalendar {
    days: Vec<AdventDay>,
    store: StateFile,
}

impl AdventCalendar {
    /// Load the calendar from its state file.
    ///
    /// A valid non-empty snapshot is adopted verbatim. Anything else
    /// (no file yet, unreadable file, empty collection) falls back to 24
    /// fresh unopened days, persisted immediately so the next load succeeds.
    pub fn load(store: StateFile) -> Self {
        let days = match store.load() {
            Ok(days) if !days.is_empty() => Some(days),
            Ok(_) => {
                warn!("State file held an empty calendar; starting fresh");
                None
            }
            Err(AdventError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No state file yet; starting fresh");
                None
            }
            Err(e) => {
                warn!("Discarding unreadable state file: {e}");
                None
            }
        };

        match days {
            Some(days) => AdventCalendar { days, store },
            None => {
                let calendar = AdventCalendar {
                    days: (1..=DAY_COUNT).map(AdventDay::new).collect(),
                    store,
                };
                calendar.persist();
                calendar
            }
        }
    }

    /// All 24 days in calendar order.
    pub fn days(&self) -> &[AdventDay] {
        &self.days
    }

    /// Look up a single day by its calendar position.
    pub fn day(&self, id: u8) -> Option<&AdventDay> {
        self.days.iter().find(|d| d.id == id)
    }

    /// Assign a distance to every day.
    ///
    /// With `allow_duplicates` each day draws independently from 1..=24;
    /// otherwise the days receive a random permutation of 1..=24, so every
    /// distance occurs exactly once. Opened state is left untouched.
    pub fn assign_km(&mut self, allow_duplicates: bool) {
        let mut rng = rand::thread_rng();

        if allow_duplicates {
            for day in &mut self.days {
                day.km = Some(rng.gen_range(1..=DAY_COUNT));
            }
        } else {
            let mut pool: Vec<u8> = (1..=DAY_COUNT).collect();
            pool.shuffle(&mut rng);
            for (day, km) in self.days.iter_mut().zip(pool) {
                day.km = Some(km);
            }
        }

        self.persist();
    }

    /// Whether a day can still be opened.
    pub fn can_open(&self, day: &AdventDay) -> bool {
        !day.opened
    }

    /// Open the day with the given id.
    ///
    /// Unknown ids and already-opened days are ignored; reopening never
    /// touches the original `opened_at` timestamp.
    pub fn open(&mut self, day_id: u8) {
        let Some(day) = self.days.iter_mut().find(|d| d.id == day_id) else {
            return;
        };
        if day.opened {
            return;
        }

        day.opened = true;
        day.opened_at = Some(Utc::now());
        self.persist();
    }

    /// Start the calendar over: reassign distances, then close every box.
    pub fn reset(&mut self, allow_duplicates: bool) {
        self.assign_km(allow_duplicates);

        for day in &mut self.days {
            day.opened = false;
            day.opened_at = None;
        }

        self.persist();
    }

    /// Best-effort write-through. A failed write never interrupts the
    /// caller; the in-memory state stays authoritative for this session.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.days) {
            warn!("Failed to persist calendar state: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> StateFile {
        StateFile::at(dir.path().join("days.json"))
    }

    #[test]
    fn fresh_start_yields_24_unassigned_closed_days() {
        let dir = TempDir::new().unwrap();
        let calendar = AdventCalendar::load(store_in(&dir));

        assert_eq!(calendar.days().len(), 24);
        for (i, day) in calendar.days().iter().enumerate() {
            assert_eq!(day.id, i as u8 + 1);
            assert_eq!(day.km, None);
            assert!(!day.opened);
            assert_eq!(day.opened_at, None);
        }
    }

    #[test]
    fn fresh_start_persists_the_baseline() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        AdventCalendar::load(store.clone());

        let persisted = store.load().unwrap();
        assert_eq!(persisted.len(), 24);
    }

    #[test]
    fn assign_without_duplicates_is_a_permutation() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        calendar.assign_km(false);

        let mut values: Vec<u8> = calendar.days().iter().map(|d| d.km.unwrap()).collect();
        values.sort_unstable();
        assert_eq!(values, (1..=24).collect::<Vec<u8>>());
    }

    #[test]
    fn assign_with_duplicates_stays_in_range() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        calendar.assign_km(true);

        for day in calendar.days() {
            let km = day.km.unwrap();
            assert!((1..=24).contains(&km));
        }
    }

    #[test]
    fn assign_leaves_opened_state_alone() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        calendar.open(5);
        let opened_at = calendar.day(5).unwrap().opened_at;

        calendar.assign_km(false);

        let day = calendar.day(5).unwrap();
        assert!(day.opened);
        assert_eq!(day.opened_at, opened_at);
    }

    #[test]
    fn open_sets_flag_and_timestamp_together() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        calendar.open(7);

        let day = calendar.day(7).unwrap();
        assert!(day.opened);
        assert!(day.opened_at.is_some());

        // The invariant holds across the whole collection.
        for day in calendar.days() {
            assert_eq!(day.opened, day.opened_at.is_some());
        }
    }

    #[test]
    fn open_twice_keeps_the_original_timestamp() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        calendar.open(7);
        let first = calendar.day(7).unwrap().opened_at.unwrap();

        calendar.open(7);

        let day = calendar.day(7).unwrap();
        assert!(day.opened);
        assert_eq!(day.opened_at, Some(first));
    }

    #[test]
    fn open_with_unknown_id_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        calendar.open(99);

        assert!(calendar.days().iter().all(|d| !d.opened));
    }

    #[test]
    fn can_open_only_closed_boxes() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        assert!(calendar.can_open(calendar.day(3).unwrap()));
        calendar.open(3);
        assert!(!calendar.can_open(calendar.day(3).unwrap()));
    }

    #[test]
    fn reset_closes_everything_and_reassigns() {
        let dir = TempDir::new().unwrap();
        let mut calendar = AdventCalendar::load(store_in(&dir));

        calendar.assign_km(false);
        calendar.open(1);
        calendar.open(12);

        calendar.reset(false);

        for day in calendar.days() {
            assert!(!day.opened);
            assert_eq!(day.opened_at, None);
        }
        let values: HashSet<u8> = calendar.days().iter().map(|d| d.km.unwrap()).collect();
        assert_eq!(values.len(), 24);
    }

    #[test]
    fn reset_persists_values_and_cleared_flags_together() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut calendar = AdventCalendar::load(store.clone());

        calendar.open(4);
        calendar.reset(false);

        let persisted = store.load().unwrap();
        assert!(persisted.iter().all(|d| !d.opened && d.opened_at.is_none()));
        assert!(persisted.iter().all(|d| d.km.is_some()));
    }

    #[test]
    fn load_round_trips_persisted_state() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut calendar = AdventCalendar::load(store.clone());
        calendar.assign_km(false);
        calendar.open(2);
        calendar.open(24);
        let before: Vec<AdventDay> = calendar.days().to_vec();
        drop(calendar);

        let reloaded = AdventCalendar::load(store);

        assert_eq!(reloaded.days().len(), before.len());
        for (loaded, original) in reloaded.days().iter().zip(&before) {
            assert_eq!(loaded.id, original.id);
            assert_eq!(loaded.km, original.km);
            assert_eq!(loaded.opened, original.opened);
            assert_eq!(loaded.opened_at, original.opened_at);
        }
    }

    #[test]
    fn corrupt_state_file_falls_back_to_fresh_and_recovers() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ definitely not a day list").unwrap();

        let calendar = AdventCalendar::load(store.clone());

        assert_eq!(calendar.days().len(), 24);
        assert!(calendar.days().iter().all(|d| !d.opened && d.km.is_none()));
        // The baseline was written over the corrupt file.
        assert_eq!(store.load().unwrap().len(), 24);
    }

    #[test]
    fn empty_collection_falls_back_to_fresh() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "[]").unwrap();

        let calendar = AdventCalendar::load(store);

        assert_eq!(calendar.days().len(), 24);
    }

    #[test]
    fn full_game_round() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut calendar = AdventCalendar::load(store);

        calendar.assign_km(false);
        let km = calendar.day(7).unwrap().km.unwrap();
        assert!((1..=24).contains(&km));

        calendar.open(7);
        let day = calendar.day(7).unwrap();
        assert!(day.opened);
        let opened_at = day.opened_at.unwrap();
        assert!(!calendar.can_open(day));

        // Reopening changes nothing.
        calendar.open(7);
        let day = calendar.day(7).unwrap();
        assert_eq!(day.km, Some(km));
        assert_eq!(day.opened_at, Some(opened_at));

        calendar.reset(true);
        for day in calendar.days() {
            assert!(!day.opened);
            assert_eq!(day.opened_at, None);
            assert!((1..=24).contains(&day.km.unwrap()));
        }
    }
}
