//! Derived views — sorting the roster for display.
//!
//! Name ordering is case-sensitive lexicographic. Last-feed ordering is by
//! minutes-since-midnight of the feed mark, not true chronological order
//! across days — that is the table's documented behavior.

use crate::fish::Fish;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Weight,
    LastFed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn reversed(self) -> Self {
        match self {
            Self::Ascending  => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The table's current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key:   SortKey,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Ascending,
        }
    }

    /// Click a column header: the same column flips direction, a new column
    /// starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if key == self.key {
            Self {
                key,
                order: self.order.reversed(),
            }
        } else {
            Self::new(key)
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortKey::Name)
    }
}

fn compare(a: &Fish, b: &Fish, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Weight => a.weight_grams.total_cmp(&b.weight_grams),
        SortKey::LastFed => a
            .schedule
            .last_feed
            .minutes_since_midnight()
            .cmp(&b.schedule.last_feed.minutes_since_midnight()),
    }
}

/// Sort a roster slice in place under the given state.
pub fn sort_fish(fish: &mut [Fish], state: SortState) {
    fish.sort_by(|a, b| {
        let ord = compare(a, b, state.key);
        match state.order {
            SortOrder::Ascending  => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}
