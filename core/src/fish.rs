//! Fish data model: health tiers, feeding schedules, and the wire shape
//! of the upstream fish feed.

use crate::error::{SimError, SimResult};
use crate::types::FishId;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Health ─────────────────────────────────────────────────────────

/// Wellbeing tier. Wire format is the integer 0–3.
/// Dead is terminal: no automatic transition ever leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HealthStatus {
    Dead,
    Bad,
    Normal,
    Good,
}

impl HealthStatus {
    /// One tier up, capped at Good.
    pub fn improved(self) -> Self {
        match self {
            Self::Dead   => Self::Dead,
            Self::Bad    => Self::Normal,
            Self::Normal => Self::Good,
            Self::Good   => Self::Good,
        }
    }

    /// One tier down, floored at Dead.
    pub fn worsened(self) -> Self {
        match self {
            Self::Dead   => Self::Dead,
            Self::Bad    => Self::Dead,
            Self::Normal => Self::Bad,
            Self::Good   => Self::Normal,
        }
    }

    pub fn is_dead(self) -> bool {
        self == Self::Dead
    }

    /// Display label for the health column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good   => "Good",
            Self::Normal => "Normal",
            Self::Bad    => "Bad",
            Self::Dead   => "Dead",
        }
    }

    /// Style tag for rendering. Pure — never touches state.
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Good   => "health-good",
            Self::Normal => "health-normal",
            Self::Bad    => "health-bad",
            Self::Dead   => "health-dead",
        }
    }
}

impl TryFrom<u8> for HealthStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Dead),
            1 => Ok(Self::Bad),
            2 => Ok(Self::Normal),
            3 => Ok(Self::Good),
            other => Err(format!("health status must be 0-3, got {other}")),
        }
    }
}

impl From<HealthStatus> for u8 {
    fn from(value: HealthStatus) -> Self {
        match value {
            HealthStatus::Dead => 0,
            HealthStatus::Bad => 1,
            HealthStatus::Normal => 2,
            HealthStatus::Good => 3,
        }
    }
}

// ── Feed time ──────────────────────────────────────────────────────

/// A time-of-day feed mark, carried on the wire as "HH:MM".
/// Rendering uses unpadded hours and zero-padded minutes ("9:05").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeedTime {
    pub hour:   u32,
    pub minute: u32,
}

impl FeedTime {
    pub fn new(hour: u32, minute: u32) -> SimResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(SimError::ScheduleParse {
                value: format!("{hour}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Capture the time-of-day of a simulated instant.
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        Self {
            hour:   now.hour(),
            minute: now.minute(),
        }
    }

    /// Minutes past midnight. The last-feed sort key.
    pub fn minutes_since_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for FeedTime {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || SimError::ScheduleParse { value: s.to_string() };
        let (h, m) = s.split_once(':').ok_or_else(|| parse_err())?;
        let hour: u32 = h.trim().parse().map_err(|_| parse_err())?;
        let minute: u32 = m.trim().parse().map_err(|_| parse_err())?;
        Self::new(hour, minute).map_err(|_| parse_err())
    }
}

impl TryFrom<String> for FeedTime {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FeedTime> for String {
    fn from(value: FeedTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FeedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

// ── Schedule and fish ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedingSchedule {
    pub interval_in_hours: f64,
    pub last_feed:         FeedTime,
}

impl FeedingSchedule {
    /// Reject schedules the feeding math cannot handle.
    pub fn validate(&self, fish_name: &str) -> SimResult<()> {
        if !(self.interval_in_hours > 0.0) {
            return Err(SimError::InvalidSchedule {
                fish:   fish_name.to_string(),
                reason: format!("intervalInHours must be > 0, got {}", self.interval_in_hours),
            });
        }
        Ok(())
    }
}

/// A fish living in the tank, enriched from its wire record at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id:           FishId,
    pub name:         String,
    pub species:      String,
    pub weight_grams: f64,
    pub health:       HealthStatus,
    pub image_url:    String,
    pub schedule:     FeedingSchedule,
}

/// The upstream feed's record shape:
/// `{ "id", "name", "type", "weight", "feedingSchedule" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FishRecord {
    pub id:     FishId,
    pub name:   String,
    #[serde(rename = "type")]
    pub species: String,
    pub weight: f64,
    pub feeding_schedule: FeedingSchedule,
}
