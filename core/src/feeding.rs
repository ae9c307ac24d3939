//! Feeding and health model — pure functions over a fish and a simulated
//! instant.
//!
//! RULES:
//!   - Dead is terminal. Nothing here resurrects a fish.
//!   - Reads never mutate. The one state-changing read the original UI had
//!     (demoting a critically overdue fish while rendering its label) lives
//!     in the health subsystem's tick pass instead.
//!   - Feeding never decreases weight.

use crate::fish::{FeedTime, FeedingSchedule, Fish, HealthStatus};
use chrono::{Duration, NaiveDateTime};

/// Width of the optimal feeding window on each side, in minutes.
pub const FEED_TOLERANCE_MINUTES: f64 = 10.0;

/// Fraction of body weight a fish eats per day, spread across its meals.
pub const DAILY_FEED_FRACTION: f64 = 0.01;

/// The tolerance band around the expected feeding interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedingWindow {
    pub optimal_minutes: f64,
    pub tolerance:       f64,
}

impl FeedingWindow {
    pub fn contains(&self, elapsed_minutes: i64) -> bool {
        let elapsed = elapsed_minutes as f64;
        elapsed >= self.optimal_minutes - self.tolerance
            && elapsed <= self.optimal_minutes + self.tolerance
    }

    pub fn overdue(&self, elapsed_minutes: i64) -> bool {
        elapsed_minutes as f64 > self.optimal_minutes + self.tolerance
    }
}

/// The window for a schedule: interval in minutes, ±10.
pub fn optimal_window(schedule: &FeedingSchedule) -> FeedingWindow {
    FeedingWindow {
        optimal_minutes: schedule.interval_in_hours * 60.0,
        tolerance:       FEED_TOLERANCE_MINUTES,
    }
}

/// Whole minutes since the last feed, anchored on `now`'s date.
///
/// The feed mark is a bare time-of-day, assumed to have happened within the
/// prior 24 hours: if it lands after `now` on today's date, it was yesterday.
pub fn minutes_since_last_feed(schedule: &FeedingSchedule, now: NaiveDateTime) -> i64 {
    let FeedTime { hour, minute } = schedule.last_feed;
    // Hour/minute are validated at parse time, so this never fails.
    let mut fed_at = now
        .date()
        .and_hms_opt(hour, minute, 0)
        .unwrap_or(now);
    if fed_at > now {
        fed_at -= Duration::days(1);
    }
    (now - fed_at).num_minutes()
}

/// Apply the feeding-window health rule. No-op for dead fish.
///
/// Inside `optimal ± tolerance` (inclusive) the fish improves one tier;
/// strictly outside it worsens one tier. The checks are complementary except
/// at the exact boundary, which counts as within.
pub fn update_health(fish: &mut Fish, now: NaiveDateTime) {
    if fish.health.is_dead() {
        return;
    }
    let elapsed = minutes_since_last_feed(&fish.schedule, now);
    let window = optimal_window(&fish.schedule);

    if window.contains(elapsed) {
        fish.health = fish.health.improved();
    } else {
        fish.health = fish.health.worsened();
    }
}

/// Feed a fish: add its per-meal portion, re-evaluate health against the
/// window, and stamp the feed time. Returns the portion in grams.
pub fn feed(fish: &mut Fish, now: NaiveDateTime) -> f64 {
    let daily_amount = fish.weight_grams * DAILY_FEED_FRACTION;
    let meals_per_day = 24.0 / fish.schedule.interval_in_hours;
    let portion = daily_amount / meals_per_day;

    fish.weight_grams += portion;
    update_health(fish, now);
    fish.schedule.last_feed = FeedTime::from_datetime(now);
    portion
}

/// The tick-driven starvation rule: a fish already in Bad health that has
/// gone past the far edge of its window dies. Returns true on demotion.
pub fn apply_starvation(fish: &mut Fish, now: NaiveDateTime) -> bool {
    if fish.health != HealthStatus::Bad {
        return false;
    }
    let elapsed = minutes_since_last_feed(&fish.schedule, now);
    if optimal_window(&fish.schedule).overdue(elapsed) {
        fish.health = HealthStatus::Dead;
        return true;
    }
    false
}

/// Human-readable "time since fed" for display. Pure.
pub fn time_since_label(schedule: &FeedingSchedule, now: NaiveDateTime) -> String {
    let elapsed = minutes_since_last_feed(schedule, now);
    if elapsed < 0 {
        return format!("Last fed at {}", schedule.last_feed);
    }
    let hours = elapsed / 60;
    let minutes = elapsed % 60;

    if hours == 0 && minutes < 10 {
        "Fed just now".to_string()
    } else if hours > 0 {
        format!("Fed {hours} hours ago")
    } else {
        format!("Fed {minutes} minutes ago")
    }
}
