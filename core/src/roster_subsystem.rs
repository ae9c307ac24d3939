//! Roster subsystem — loads the fish roster once at startup.
//!
//! The original application fetched its fish list a single time when the
//! tank mounted. Here that happens on the subsystem's first update: the
//! registry is filled from the configured source, and a failed fetch leaves
//! an empty tank with the failure in the log.

use crate::{
    config::SpeciesCatalog,
    error::SimResult,
    event::SimEvent,
    registry::{FishRegistry, FishSource},
    subsystem::TankSubsystem,
    types::Tick,
};
use chrono::NaiveDateTime;

pub struct RosterSubsystem {
    source: Box<dyn FishSource + Send>,
    catalog: SpeciesCatalog,
    initialized: bool,
}

impl RosterSubsystem {
    pub fn new(source: Box<dyn FishSource + Send>, catalog: SpeciesCatalog) -> Self {
        Self {
            source,
            catalog,
            initialized: false,
        }
    }
}

impl TankSubsystem for RosterSubsystem {
    fn name(&self) -> &'static str {
        "roster"
    }

    fn update(
        &mut self,
        tick: Tick,
        _now: NaiveDateTime,
        registry: &mut FishRegistry,
        _events_in: &[SimEvent],
    ) -> SimResult<Vec<SimEvent>> {
        if self.initialized {
            return Ok(vec![]);
        }
        self.initialized = true;

        let count = registry.load(self.source.as_ref(), &self.catalog);
        if count == 0 && registry.is_empty() {
            // Load failure (already logged) or a genuinely empty feed.
            return Ok(vec![]);
        }
        log::info!("tick={tick} roster: loaded {count} fish");
        Ok(vec![SimEvent::RosterLoaded { tick, count }])
    }
}
