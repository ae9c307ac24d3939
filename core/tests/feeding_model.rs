use aquasim_core::feeding::{
    self, apply_starvation, feed, minutes_since_last_feed, optimal_window, update_health,
};
use aquasim_core::fish::{FeedTime, FeedingSchedule, Fish, HealthStatus};
use chrono::{NaiveDate, NaiveDateTime};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn make_fish(interval_hours: f64, last_feed: &str, weight: f64, health: HealthStatus) -> Fish {
    Fish {
        id: "f-test".into(),
        name: "Testfish".into(),
        species: "Goldfish".into(),
        weight_grams: weight,
        health,
        image_url: "assets/fish/goldfish.webp".into(),
        schedule: FeedingSchedule {
            interval_in_hours: interval_hours,
            last_feed: last_feed.parse().unwrap(),
        },
    }
}

// ── Elapsed-time math ────────────────────────────────────────────────────────

/// Fed at 12:00, clock at 13:00 — one hour elapsed.
#[test]
fn elapsed_minutes_same_day() {
    let schedule = FeedingSchedule {
        interval_in_hours: 4.0,
        last_feed: "12:00".parse().unwrap(),
    };
    assert_eq!(minutes_since_last_feed(&schedule, at(13, 0)), 60);
}

/// A feed mark after the current time-of-day belongs to yesterday:
/// fed at 23:30, clock at 00:10 — 40 minutes elapsed, never negative.
#[test]
fn elapsed_minutes_wraps_across_midnight() {
    let schedule = FeedingSchedule {
        interval_in_hours: 4.0,
        last_feed: "23:30".parse().unwrap(),
    };
    assert_eq!(minutes_since_last_feed(&schedule, at(0, 10)), 40);
}

#[test]
fn elapsed_minutes_zero_at_feed_instant() {
    let schedule = FeedingSchedule {
        interval_in_hours: 4.0,
        last_feed: "13:00".parse().unwrap(),
    };
    assert_eq!(minutes_since_last_feed(&schedule, at(13, 0)), 0);
}

// ── Feed-time parsing and formatting ─────────────────────────────────────────

/// Malformed "HH:MM" surfaces as ScheduleParse, never NaN arithmetic.
#[test]
fn malformed_feed_time_is_rejected() {
    for bad in ["nonsense", "12", "12:xx", "25:00", "12:75", ""] {
        let parsed: Result<FeedTime, _> = bad.parse();
        assert!(parsed.is_err(), "'{bad}' should fail to parse");
    }
}

/// Hours render unpadded, minutes zero-padded.
#[test]
fn feed_time_renders_unpadded_hours() {
    let t: FeedTime = "09:05".parse().unwrap();
    assert_eq!(t.to_string(), "9:05");
    let t: FeedTime = "14:05".parse().unwrap();
    assert_eq!(t.to_string(), "14:05");
}

// ── Optimal window ───────────────────────────────────────────────────────────

#[test]
fn window_is_interval_minutes_plus_minus_ten() {
    let schedule = FeedingSchedule {
        interval_in_hours: 4.0,
        last_feed: "12:00".parse().unwrap(),
    };
    let window = optimal_window(&schedule);
    assert_eq!(window.optimal_minutes, 240.0);
    assert_eq!(window.tolerance, 10.0);
    assert!(window.contains(230));
    assert!(window.contains(250));
    assert!(!window.contains(229));
    assert!(!window.contains(251));
}

// ── Health transitions ───────────────────────────────────────────────────────

/// A 4-hour fish fed at 12:00 and read at 13:00 is 60 minutes elapsed —
/// far below the 240±10 window, so health drops one tier.
#[test]
fn early_feed_outside_window_decrements_health() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Normal);
    update_health(&mut fish, at(13, 0));
    assert_eq!(fish.health, HealthStatus::Bad);
}

#[test]
fn feed_inside_window_increments_health() {
    // 240 minutes after a 12:00 feed is dead-center of the window.
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Normal);
    update_health(&mut fish, at(16, 0));
    assert_eq!(fish.health, HealthStatus::Good);
}

/// The window edges are inclusive: exactly optimal ± tolerance improves.
#[test]
fn window_boundary_counts_as_within() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Normal);
    update_health(&mut fish, at(15, 50)); // 230 = 240 - 10
    assert_eq!(fish.health, HealthStatus::Good);

    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Normal);
    update_health(&mut fish, at(16, 10)); // 250 = 240 + 10
    assert_eq!(fish.health, HealthStatus::Good);
}

#[test]
fn health_caps_at_good() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Good);
    update_health(&mut fish, at(16, 0));
    assert_eq!(fish.health, HealthStatus::Good);
}

#[test]
fn health_floors_at_dead() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Bad);
    update_health(&mut fish, at(13, 0));
    assert_eq!(fish.health, HealthStatus::Dead);
}

/// Dead is terminal: no update ever changes a dead fish.
#[test]
fn dead_fish_never_transition() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Dead);
    update_health(&mut fish, at(16, 0)); // would improve a living fish
    assert_eq!(fish.health, HealthStatus::Dead);
    update_health(&mut fish, at(13, 0)); // would worsen a living fish
    assert_eq!(fish.health, HealthStatus::Dead);
    assert!(!apply_starvation(&mut fish, at(23, 0)));
    assert_eq!(fish.health, HealthStatus::Dead);
}

// ── Feeding ──────────────────────────────────────────────────────────────────

/// Feeding a 100g fish on a 4-hour interval at 14:05 adds its per-meal
/// portion, 100 * 0.01 / (24/4) = 1/6 g, and the feed mark becomes "14:05".
#[test]
fn feed_adds_per_meal_portion_and_stamps_time() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Normal);
    let portion = feed(&mut fish, at(14, 5));

    assert!((portion - 100.0 * 0.01 / 6.0).abs() < 1e-9);
    assert!((fish.weight_grams - 100.1666).abs() < 1e-3);
    assert_eq!(fish.schedule.last_feed.to_string(), "14:05");
}

/// Feeding never decreases weight, however often it happens.
#[test]
fn repeated_feeding_is_weight_monotone() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Normal);
    let mut prior = fish.weight_grams;
    for minute in 0..30 {
        feed(&mut fish, at(13, minute));
        assert!(
            fish.weight_grams >= prior,
            "weight regressed: {} -> {}",
            prior,
            fish.weight_grams
        );
        prior = fish.weight_grams;
    }
}

/// Feeding a dead fish still adds weight (the pellet sinks) but never
/// resurrects it.
#[test]
fn feeding_a_dead_fish_does_not_revive_it() {
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Dead);
    feed(&mut fish, at(16, 0));
    assert_eq!(fish.health, HealthStatus::Dead);
}

// ── Starvation ───────────────────────────────────────────────────────────────

/// Only a Bad fish past the far window edge dies.
#[test]
fn starvation_kills_only_overdue_bad_fish() {
    // Bad and overdue: 300 > 250.
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Bad);
    assert!(apply_starvation(&mut fish, at(17, 0)));
    assert_eq!(fish.health, HealthStatus::Dead);

    // Bad but not yet overdue: 250 is the inclusive edge.
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Bad);
    assert!(!apply_starvation(&mut fish, at(16, 10)));
    assert_eq!(fish.health, HealthStatus::Bad);

    // Overdue but healthy: untouched.
    let mut fish = make_fish(4.0, "12:00", 100.0, HealthStatus::Good);
    assert!(!apply_starvation(&mut fish, at(17, 0)));
    assert_eq!(fish.health, HealthStatus::Good);
}

// ── Display formatting ───────────────────────────────────────────────────────

#[test]
fn time_since_labels() {
    let schedule = FeedingSchedule {
        interval_in_hours: 4.0,
        last_feed: "13:00".parse().unwrap(),
    };
    assert_eq!(feeding::time_since_label(&schedule, at(13, 5)), "Fed just now");
    assert_eq!(
        feeding::time_since_label(&schedule, at(13, 45)),
        "Fed 45 minutes ago"
    );
    assert_eq!(
        feeding::time_since_label(&schedule, at(16, 30)),
        "Fed 3 hours ago"
    );
}

#[test]
fn health_labels_and_style_classes_are_pure_mappings() {
    assert_eq!(HealthStatus::Good.label(), "Good");
    assert_eq!(HealthStatus::Normal.label(), "Normal");
    assert_eq!(HealthStatus::Bad.label(), "Bad");
    assert_eq!(HealthStatus::Dead.label(), "Dead");

    assert_eq!(HealthStatus::Good.style_class(), "health-good");
    assert_eq!(HealthStatus::Dead.style_class(), "health-dead");
}
