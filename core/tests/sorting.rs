use aquasim_core::fish::{FeedingSchedule, Fish, HealthStatus};
use aquasim_core::views::{sort_fish, SortKey, SortOrder, SortState};

fn fish(name: &str, weight: f64, last_feed: &str) -> Fish {
    Fish {
        id: format!("f-{name}"),
        name: name.into(),
        species: "Guppy".into(),
        weight_grams: weight,
        health: HealthStatus::Normal,
        image_url: "assets/fish/guppy.webp".into(),
        schedule: FeedingSchedule {
            interval_in_hours: 6.0,
            last_feed: last_feed.parse().unwrap(),
        },
    }
}

fn tank() -> Vec<Fish> {
    vec![
        fish("betty", 3.5, "9:30"),
        fish("Alba", 120.0, "23:45"),
        fish("Zed", 0.9, "0:15"),
        fish("alba", 28.0, "14:00"),
    ]
}

fn names(fish: &[Fish]) -> Vec<&str> {
    fish.iter().map(|f| f.name.as_str()).collect()
}

/// Name order is case-sensitive lexicographic: uppercase sorts first.
#[test]
fn name_sort_is_case_sensitive() {
    let mut fish = tank();
    sort_fish(&mut fish, SortState::new(SortKey::Name));
    assert_eq!(names(&fish), ["Alba", "Zed", "alba", "betty"]);
}

/// Sorting by weight ascending then descending yields inverse orderings.
#[test]
fn weight_sort_directions_are_inverse() {
    let mut asc = tank();
    sort_fish(&mut asc, SortState::new(SortKey::Weight));
    assert_eq!(names(&asc), ["Zed", "betty", "alba", "Alba"]);

    let mut desc = tank();
    sort_fish(
        &mut desc,
        SortState::new(SortKey::Weight).toggle(SortKey::Weight),
    );
    let reversed: Vec<&str> = names(&asc).into_iter().rev().collect();
    assert_eq!(names(&desc), reversed);
}

/// Last-feed order uses minutes since midnight of the mark — "23:45" sorts
/// after "14:00" even if it actually happened yesterday.
#[test]
fn last_feed_sorts_by_minutes_since_midnight() {
    let mut fish = tank();
    sort_fish(&mut fish, SortState::new(SortKey::LastFed));
    assert_eq!(names(&fish), ["Zed", "betty", "alba", "Alba"]);
}

/// Clicking the active column reverses it; clicking a new column resets to
/// ascending.
#[test]
fn toggle_reverses_same_column_and_resets_new_column() {
    let state = SortState::new(SortKey::Name);
    assert_eq!(state.order, SortOrder::Ascending);

    let flipped = state.toggle(SortKey::Name);
    assert_eq!(flipped.key, SortKey::Name);
    assert_eq!(flipped.order, SortOrder::Descending);

    let back = flipped.toggle(SortKey::Name);
    assert_eq!(back.order, SortOrder::Ascending);

    let other = flipped.toggle(SortKey::Weight);
    assert_eq!(other.key, SortKey::Weight);
    assert_eq!(other.order, SortOrder::Ascending);
}
