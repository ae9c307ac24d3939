//! Health subsystem — the tick-driven starvation pass.
//!
//! The original demoted a critically overdue fish as a side effect of
//! reading its health label. That hidden mutation is now an explicit pass:
//! every tick, any fish in Bad health that has blown past the far edge of
//! its feeding window dies. Dead fish are skipped — dead is terminal.

use crate::{
    error::SimResult,
    event::SimEvent,
    feeding,
    registry::FishRegistry,
    subsystem::TankSubsystem,
    types::Tick,
};
use chrono::NaiveDateTime;

#[derive(Default)]
pub struct HealthSubsystem;

impl HealthSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl TankSubsystem for HealthSubsystem {
    fn name(&self) -> &'static str {
        "health"
    }

    fn update(
        &mut self,
        tick: Tick,
        now: NaiveDateTime,
        registry: &mut FishRegistry,
        _events_in: &[SimEvent],
    ) -> SimResult<Vec<SimEvent>> {
        let mut events = Vec::new();
        for fish in registry.iter_mut() {
            if feeding::apply_starvation(fish, now) {
                log::debug!("tick={tick} health: {} ({}) starved", fish.name, fish.id);
                events.push(SimEvent::FishDied {
                    tick,
                    fish_id: fish.id.clone(),
                });
            }
        }
        Ok(events)
    }
}
