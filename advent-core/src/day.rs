//! The per-box calendar entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One box of the 24-day advent calendar.
///
/// The distance stays `None` until an assignment pass fills it in, and
/// `opened_at` is set exactly once when the box transitions to opened.
/// Invariant: `opened_at` is `Some` iff `opened` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventDay {
    /// Calendar position, 1..=24. Immutable once created.
    pub id: u8,

    /// Assigned distance in kilometers (1..=24), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km: Option<u8>,

    /// Whether the box has been opened.
    pub opened: bool,

    /// When the box was opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<DateTime<Utc>>,
}

impl AdventDay {
    /// A fresh box: no distance assigned, never opened.
    pub fn new(id: u8) -> Self {
        AdventDay {
            id,
            km: None,
            opened: false,
            opened_at: None,
        }
    }
}

/// Identity is the calendar position; two `AdventDay` values with the same
/// `id` refer to the same box regardless of their mutable state.
impl PartialEq for AdventDay {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AdventDay {}
