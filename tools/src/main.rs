//! tank-runner: headless runner for the aquarium simulation.
//!
//! Usage:
//!   tank-runner --ticks 3600 --speed 60 --db run.db
//!   tank-runner --ticks 900 --feed-every 240 --paced

use anyhow::Result;
use aquasim_core::{
    clock::SimSpeed,
    command::PlayerCommand,
    config::SpeciesCatalog,
    engine::TankEngine,
    feeding,
    registry::JsonFishSource,
    store::SimStore,
    views::SortState,
};
use std::env;
use std::time::Duration;
use uuid::Uuid;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticks = parse_arg(&args, "--ticks", 3600u64);
    let multiplier = parse_arg(&args, "--speed", 60u32);
    let feed_every = parse_arg(&args, "--feed-every", 0u64);
    let paced = args.iter().any(|a| a == "--paced");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let speed = SimSpeed::from_multiplier(multiplier)
        .ok_or_else(|| anyhow::anyhow!("--speed must be one of 1, 60, 120, 3600"))?;

    println!("aquasim — tank-runner");
    println!("  ticks:      {ticks}");
    println!("  speed:      {multiplier}x ({:.2}ms/tick paced)", 1000.0 / f64::from(multiplier));
    println!("  feed every: {feed_every} ticks");
    println!("  db:         {db}");
    println!("  data_dir:   {data_dir}");
    println!();

    let store = SimStore::open(db)?;
    store.migrate()?;

    let run_id = format!("run-{}", Uuid::new_v4());
    store.insert_run(&run_id, env!("CARGO_PKG_VERSION"))?;

    let catalog = SpeciesCatalog::load(data_dir).unwrap_or_else(|e| {
        log::warn!("species catalog unavailable ({e}); using built-in defaults");
        SpeciesCatalog::default()
    });
    let source = JsonFishSource::new(format!("{data_dir}/tank/fish.json"));
    let start = chrono::Local::now().naive_local();

    let mut engine = TankEngine::build(run_id.clone(), start, store, Box::new(source), catalog);

    engine.initialize_run()?;
    engine.apply_command(PlayerCommand::StartClock { speed })?;

    for i in 1..=ticks {
        engine.tick()?;

        if feed_every > 0 && i % feed_every == 0 {
            let ids: Vec<String> = engine
                .roster()
                .iter()
                .filter(|f| !f.health.is_dead())
                .map(|f| f.id.clone())
                .collect();
            for fish_id in ids {
                engine.apply_command(PlayerCommand::Feed { fish_id })?;
            }
        }

        if paced {
            std::thread::sleep(Duration::from_secs_f64(
                engine.clock.tick_period_ms() / 1000.0,
            ));
        }
    }
    engine.apply_command(PlayerCommand::StopClock)?;

    print_summary(&engine, &run_id, ticks)?;
    Ok(())
}

fn print_summary(engine: &TankEngine, run_id: &str, ticks: u64) -> Result<()> {
    let now = engine.clock.now;
    let roster = engine.sorted_roster(SortState::default());
    let alive = roster.iter().filter(|f| !f.health.is_dead()).count();

    println!("=== RUN SUMMARY ===");
    println!("  run_id:     {run_id}");
    println!("  ticks run:  {ticks}");
    println!("  sim time:   {now}");
    println!("  fish:       {} ({alive} alive)", roster.len());
    println!("  feedings:   {}", engine.store_event_count(run_id, "fish_fed")?);
    println!("  deaths:     {}", engine.store_event_count(run_id, "fish_died")?);
    println!();
    println!("=== TANK ===");
    if roster.is_empty() {
        println!("  (empty tank — roster load failed or feed was empty)");
    }
    for fish in &roster {
        println!(
            "  {:<12} {:<10} {:>8.2}g  {:<6}  {}",
            fish.name,
            fish.species,
            fish.weight_grams,
            fish.health.label(),
            feeding::time_since_label(&fish.schedule, now),
        );
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
