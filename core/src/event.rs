//! Simulation events — everything observable that happens in the tank.
//!
//! RULE: Subsystems report through events; the engine persists every event
//! to the event log. Variants are added over time — never removed or
//! reordered.

use crate::clock::SimSpeed;
use crate::fish::HealthStatus;
use crate::types::{FishId, RunId, Tick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine events ──────────────────────────────
    TickStarted {
        tick: Tick,
    },
    TickCompleted {
        tick: Tick,
    },
    RunInitialized {
        run_id: RunId,
        start_time: String,
    },

    // ── Roster events ──────────────────────────────
    RosterLoaded {
        tick: Tick,
        count: usize,
    },

    // ── Feeding and health events ──────────────────
    FishFed {
        tick: Tick,
        fish_id: FishId,
        portion_grams: f64,
        new_weight_grams: f64,
        health: HealthStatus,
    },
    FishHealthChanged {
        tick: Tick,
        fish_id: FishId,
        from: HealthStatus,
        to: HealthStatus,
    },
    FishDied {
        tick: Tick,
        fish_id: FishId,
    },

    // ── Clock events ───────────────────────────────
    SpeedChanged {
        tick: Tick,
        speed: SimSpeed,
    },

    // ── Player command events ──────────────────────
    PlayerCommandReceived {
        tick: Tick,
        command_type: String,
    },
}

/// Extract a stable string name from a SimEvent variant.
/// Used for the event_type column in event_log.
pub fn event_type_name(event: &SimEvent) -> &'static str {
    match event {
        SimEvent::TickStarted { .. }           => "tick_started",
        SimEvent::TickCompleted { .. }         => "tick_completed",
        SimEvent::RunInitialized { .. }        => "run_initialized",
        SimEvent::RosterLoaded { .. }          => "roster_loaded",
        SimEvent::FishFed { .. }               => "fish_fed",
        SimEvent::FishHealthChanged { .. }     => "fish_health_changed",
        SimEvent::FishDied { .. }              => "fish_died",
        SimEvent::SpeedChanged { .. }          => "speed_changed",
        SimEvent::PlayerCommandReceived { .. } => "player_command_received",
    }
}

/// The event log entry as persisted to SQLite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id: Option<i64>,
    pub run_id: RunId,
    pub tick: Tick,
    pub subsystem: String,
    pub event_type: String,
    pub payload: String, // JSON-serialized SimEvent
}
