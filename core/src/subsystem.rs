//! Subsystem trait.
//!
//! RULE: Every tank subsystem implements TankSubsystem.
//! The engine calls update() on each registered subsystem
//! in registration order, every tick.
//! Execution order is fixed and documented in engine.rs.

use crate::{error::SimResult, event::SimEvent, registry::FishRegistry, types::Tick};
use chrono::NaiveDateTime;

/// The contract every subsystem must fulfill.
pub trait TankSubsystem: Send {
    /// Unique stable name for this subsystem.
    fn name(&self) -> &'static str;

    /// Called once per tick by the engine.
    ///
    /// - `tick`:      the current tick number
    /// - `now`:       the simulated time just posted by the clock
    /// - `registry`:  the live fish roster
    /// - `events_in`: events emitted by earlier subsystems this tick
    ///
    /// Returns a vec of new events to add to the tick's event log.
    fn update(
        &mut self,
        tick: Tick,
        now: NaiveDateTime,
        registry: &mut FishRegistry,
        events_in: &[SimEvent],
    ) -> SimResult<Vec<SimEvent>>;
}
