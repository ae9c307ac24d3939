//! Tank clock — owns simulated time, speed control, and pause.
//!
//! Simulated time is a plain `NaiveDateTime`. Each `advance()` moves it
//! forward by `multiplier` simulated seconds, and a paced driver fires
//! `advance()` every `tick_period_ms()` real milliseconds — so a higher
//! multiplier both jumps further and ticks faster, matching the tank's
//! speed-selector semantics.

use crate::types::Tick;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankClock {
    pub current_tick: Tick,
    pub now:          NaiveDateTime,
    pub speed:        SimSpeed,
    pub paused:       bool,
}

impl TankClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current_tick: 0,
            now: start,
            speed: SimSpeed::RealTime,
            paused: true,
        }
    }

    /// Advance one tick: simulated time moves forward by `multiplier`
    /// seconds. Returns the new tick number.
    /// Panics if called while paused — callers must check.
    pub fn advance(&mut self) -> Tick {
        assert!(!self.paused, "advance() called on paused clock");
        self.now += Duration::seconds(i64::from(self.speed.multiplier()));
        self.current_tick += 1;
        self.current_tick
    }

    /// Set a speed and resume. Replaces whatever cadence was running before:
    /// drivers re-read `tick_period_ms()` each cycle, so there is never more
    /// than one effective timer.
    pub fn start(&mut self, speed: SimSpeed) {
        self.speed = speed;
        self.paused = false;
    }

    /// Halt advancement. Idempotent.
    pub fn stop(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Change the multiplier and restart the cadence at the new period —
    /// even when the clock was stopped, matching the speed selector's
    /// behavior of always (re)arming the timer.
    pub fn set_speed(&mut self, speed: SimSpeed) {
        self.speed = speed;
        self.paused = false;
    }

    /// Real milliseconds between driver ticks: 1000 / multiplier.
    pub fn tick_period_ms(&self) -> f64 {
        1000.0 / f64::from(self.speed.multiplier())
    }
}

/// The speed-selector settings: simulated seconds added per tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SimSpeed {
    RealTime,          //    1x — one simulated second per tick
    MinutePerSecond,   //   60x
    TwoMinutesPerSecond, //  120x
    HourPerSecond,     // 3600x
}

impl SimSpeed {
    pub fn multiplier(self) -> u32 {
        match self {
            Self::RealTime          => 1,
            Self::MinutePerSecond   => 60,
            Self::TwoMinutesPerSecond => 120,
            Self::HourPerSecond     => 3600,
        }
    }

    /// Map a raw selector value back to a speed. Unknown values are `None`.
    pub fn from_multiplier(multiplier: u32) -> Option<Self> {
        match multiplier {
            1    => Some(Self::RealTime),
            60   => Some(Self::MinutePerSecond),
            120  => Some(Self::TwoMinutesPerSecond),
            3600 => Some(Self::HourPerSecond),
            _    => None,
        }
    }
}
