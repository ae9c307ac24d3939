//! Fish registry — the in-memory roster and the source it loads from.
//!
//! The roster is fetched once at startup from a `FishSource` (a JSON file
//! standing in for the original's remote endpoint). A failed or malformed
//! fetch is logged and leaves the prior roster untouched — the tank is
//! simply empty on a failed first load, never half-populated.

use crate::config::SpeciesCatalog;
use crate::error::{SimError, SimResult};
use crate::fish::{Fish, FishRecord, HealthStatus};
use serde::Deserialize;

/// The upstream envelope: `{ "data": [ ...records ] }`.
#[derive(Debug, Deserialize)]
struct FishFeed {
    data: Vec<FishRecord>,
}

/// Where fish records come from.
pub trait FishSource {
    fn fetch(&self) -> SimResult<Vec<FishRecord>>;
}

/// Reads the feed envelope from a JSON file on disk.
pub struct JsonFishSource {
    path: String,
}

impl JsonFishSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl FishSource for JsonFishSource {
    fn fetch(&self) -> SimResult<Vec<FishRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| SimError::SourceUnavailable(format!("{}: {e}", self.path)))?;
        let feed: FishFeed = serde_json::from_str(&content)?;
        Ok(feed.data)
    }
}

/// Parses the feed envelope from a JSON string. Used in tests and demos.
pub struct InlineJsonSource {
    json: String,
}

impl InlineJsonSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl FishSource for InlineJsonSource {
    fn fetch(&self) -> SimResult<Vec<FishRecord>> {
        let feed: FishFeed = serde_json::from_str(&self.json)?;
        Ok(feed.data)
    }
}

/// The live fish roster.
#[derive(Debug, Default)]
pub struct FishRegistry {
    fish: Vec<Fish>,
}

impl FishRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the roster and enrich each record: initial health Normal, image
    /// resolved by species. Any failure — unreachable source, bad JSON, an
    /// invalid schedule — is logged and the prior roster kept.
    pub fn load(&mut self, source: &dyn FishSource, catalog: &SpeciesCatalog) -> usize {
        match self.try_load(source, catalog) {
            Ok(count) => count,
            Err(e) => {
                log::error!("Error fetching fish list: {e}");
                0
            }
        }
    }

    fn try_load(&mut self, source: &dyn FishSource, catalog: &SpeciesCatalog) -> SimResult<usize> {
        let records = source.fetch()?;

        let mut roster = Vec::with_capacity(records.len());
        for record in records {
            record.feeding_schedule.validate(&record.name)?;
            roster.push(Fish {
                image_url: catalog.image_for(&record.species).to_string(),
                id:           record.id,
                name:         record.name,
                species:      record.species,
                weight_grams: record.weight,
                health:       HealthStatus::Normal,
                schedule:     record.feeding_schedule,
            });
        }

        self.fish = roster;
        Ok(self.fish.len())
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Fish> {
        self.fish.iter_mut()
    }

    /// A stale or unknown id reads as None, never a panic.
    pub fn get(&self, id: &str) -> Option<&Fish> {
        self.fish.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Fish> {
        self.fish.iter_mut().find(|f| f.id == id)
    }

    pub fn as_slice(&self) -> &[Fish] {
        &self.fish
    }

    pub fn to_vec(&self) -> Vec<Fish> {
        self.fish.clone()
    }

    /// Restore a roster from a snapshot.
    pub fn restore(&mut self, fish: Vec<Fish>) {
        self.fish = fish;
    }
}
