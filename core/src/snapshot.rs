//! Snapshot serialization — full tank state to/from JSON.
//!
//! A snapshot is taken every SNAPSHOT_INTERVAL ticks.
//! It captures the complete state needed to resume simulation
//! from that tick without replaying from tick 0.

use crate::{
    clock::TankClock,
    fish::Fish,
    types::{FishId, RunId, Tick},
};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_INTERVAL: Tick = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub run_id: RunId,
    pub tick: Tick,
    pub clock: TankClock,
    pub fish: Vec<Fish>,
    pub selected: Option<FishId>,
}
