//! The availability record: the single mutable document in the system.
//!
//! The record lists which item ids are currently offered and when that set
//! last changed. It is replaced wholesale on every admin save; `last_updated`
//! is the sole freshness signal and advances on every write, even when the
//! id set is unchanged.
//!
//! Ids are NOT validated against the catalog at write time. An id with no
//! catalog entry is carried verbatim and silently skipped at display time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// The persisted availability document.
///
/// Wire field names match the original `available.json` document format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    /// Ids currently marked available. Stored as a list for a stable wire
    /// form; membership checks treat it as a set.
    pub available_items: Vec<ItemId>,
    /// When the set was last replaced.
    pub last_updated: DateTime<Utc>,
}

impl AvailabilityRecord {
    /// The well-defined default returned when no record has been written yet.
    #[must_use]
    pub const fn empty(now: DateTime<Utc>) -> Self {
        Self {
            available_items: Vec::new(),
            last_updated: now,
        }
    }

    /// Whether the given item id is marked available.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.available_items.iter().any(|i| i == id)
    }
}
