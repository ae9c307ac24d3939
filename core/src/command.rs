use crate::clock::SimSpeed;
use crate::types::FishId;
use serde::{Deserialize, Serialize};

/// All player-issued commands.
/// Variants added over time — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    // ── Clock control ─────────────────────────────
    StartClock { speed: SimSpeed },
    StopClock,
    SetSpeed { speed: SimSpeed },

    // ── Tank interaction ──────────────────────────
    Feed { fish_id: FishId },
    Select { fish_id: FishId },
    Deselect,
}

impl PlayerCommand {
    /// Stable name for the command log.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::StartClock { .. } => "start_clock",
            Self::StopClock         => "stop_clock",
            Self::SetSpeed { .. }   => "set_speed",
            Self::Feed { .. }       => "feed",
            Self::Select { .. }     => "select",
            Self::Deselect          => "deselect",
        }
    }
}
