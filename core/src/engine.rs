//! The simulation engine — the heart of the tank.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Roster subsystem  (loads the fish list on first update)
//!   2. Health subsystem  (tick-driven starvation pass)
//!
//! RULES:
//!   - Subsystems execute in registration order, every tick.
//!   - All state changes flow through the engine: subsystem updates on
//!     tick, player commands between ticks. Nothing mutates the roster
//!     from outside.
//!   - Every subsystem and command event is recorded in the event log.

use crate::{
    clock::{SimSpeed, TankClock},
    command::PlayerCommand,
    config::SpeciesCatalog,
    error::SimResult,
    event::{event_type_name, EventLogEntry, SimEvent},
    feeding,
    fish::Fish,
    health_subsystem::HealthSubsystem,
    registry::{FishRegistry, FishSource, InlineJsonSource},
    roster_subsystem::RosterSubsystem,
    snapshot::{SimSnapshot, SNAPSHOT_INTERVAL},
    store::SimStore,
    subsystem::TankSubsystem,
    types::{FishId, RunId, Tick},
    views::{sort_fish, SortState},
};
use chrono::{NaiveDate, NaiveDateTime};

pub struct TankEngine {
    pub run_id: RunId,
    pub clock:  TankClock,
    registry:   FishRegistry,
    selected:   Option<FishId>,
    subsystems: Vec<Box<dyn TankSubsystem>>,
    store:      SimStore,
    run_initialized: bool,
}

impl TankEngine {
    pub fn new(run_id: RunId, start: NaiveDateTime, store: SimStore) -> Self {
        Self {
            clock: TankClock::new(start),
            registry: FishRegistry::new(),
            selected: None,
            subsystems: Vec::new(),
            store,
            run_id,
            run_initialized: false,
        }
    }

    /// Build a fully wired engine with all subsystems registered.
    /// Call this instead of new() + manual register() calls.
    pub fn build(
        run_id: RunId,
        start: NaiveDateTime,
        store: SimStore,
        source: Box<dyn FishSource + Send>,
        catalog: SpeciesCatalog,
    ) -> Self {
        let mut engine = TankEngine::new(run_id, start, store);

        // EXECUTION ORDER — fixed, documented, never reordered.
        engine.register(Box::new(RosterSubsystem::new(source, catalog)));
        engine.register(Box::new(HealthSubsystem::new()));
        engine
    }

    /// Engine over an in-memory store and an inline JSON feed.
    /// The test entry point: no filesystem, no database file.
    pub fn build_test(run_id: RunId, feed_json: &str) -> SimResult<Self> {
        let store = SimStore::in_memory()?;
        store.migrate()?;
        store.insert_run(&run_id, env!("CARGO_PKG_VERSION"))?;
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(13, 0, 0))
            .unwrap_or_default();
        Ok(Self::build(
            run_id,
            start,
            store,
            Box::new(InlineJsonSource::new(feed_json)),
            SpeciesCatalog::default(),
        ))
    }

    /// Register a subsystem. Call in the documented execution order.
    pub fn register(&mut self, subsystem: Box<dyn TankSubsystem>) {
        self.subsystems.push(subsystem);
    }

    /// Advance one tick. This is the core simulation step.
    pub fn tick(&mut self) -> SimResult<Vec<SimEvent>> {
        assert!(!self.clock.paused, "tick() called on paused engine");

        let current_tick = self.clock.advance();
        let now = self.clock.now;
        let mut tick_events: Vec<SimEvent> = vec![SimEvent::TickStarted { tick: current_tick }];

        // Execute each subsystem in registration order.
        // Each subsystem sees all events emitted so far this tick.
        for subsystem in &mut self.subsystems {
            let new_events =
                subsystem.update(current_tick, now, &mut self.registry, &tick_events)?;

            // Persist each new event to the log.
            for event in &new_events {
                let entry = EventLogEntry {
                    id:         None,
                    run_id:     self.run_id.clone(),
                    tick:       current_tick,
                    subsystem:  subsystem.name().to_string(),
                    event_type: event_type_name(event).to_string(),
                    payload:    serde_json::to_string(event)?,
                };
                self.store.append_event(&entry)?;
            }

            tick_events.extend(new_events);
        }

        tick_events.push(SimEvent::TickCompleted { tick: current_tick });

        // Snapshot every SNAPSHOT_INTERVAL ticks.
        if current_tick % SNAPSHOT_INTERVAL == 0 {
            self.take_snapshot(current_tick)?;
        }

        Ok(tick_events)
    }

    /// Record RunInitialized once, before the first tick, so runs are
    /// identifiable in the log. Safe to call repeatedly.
    pub fn initialize_run(&mut self) -> SimResult<()> {
        if !self.run_initialized {
            self.run_initialized = true;
            let init_event = SimEvent::RunInitialized {
                run_id: self.run_id.clone(),
                start_time: self.clock.now.to_string(),
            };
            self.persist_events(std::slice::from_ref(&init_event), "engine", 0)?;
        }
        Ok(())
    }

    /// Run n ticks in a loop. Used for testing and fast-forward.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<()> {
        self.initialize_run()?;
        self.clock.resume();
        for _ in 0..n {
            self.tick()?;
        }
        self.clock.stop();
        Ok(())
    }

    /// Apply a player command between ticks. Commands take effect
    /// immediately, in call order — the cooperative model has no queue.
    pub fn apply_command(&mut self, command: PlayerCommand) -> SimResult<Vec<SimEvent>> {
        let tick = self.clock.current_tick;
        let now = self.clock.now;
        let mut events = vec![SimEvent::PlayerCommandReceived {
            tick,
            command_type: command.type_name().to_string(),
        }];

        match command {
            PlayerCommand::StartClock { speed } => {
                self.clock.start(speed);
                events.push(SimEvent::SpeedChanged { tick, speed });
            }
            PlayerCommand::StopClock => {
                self.clock.stop();
            }
            PlayerCommand::SetSpeed { speed } => {
                self.clock.set_speed(speed);
                events.push(SimEvent::SpeedChanged { tick, speed });
            }
            PlayerCommand::Feed { fish_id } => match self.registry.get_mut(&fish_id) {
                Some(fish) => {
                    let before = fish.health;
                    let portion = feeding::feed(fish, now);
                    events.push(SimEvent::FishFed {
                        tick,
                        fish_id: fish.id.clone(),
                        portion_grams: portion,
                        new_weight_grams: fish.weight_grams,
                        health: fish.health,
                    });
                    if fish.health != before {
                        events.push(SimEvent::FishHealthChanged {
                            tick,
                            fish_id: fish.id.clone(),
                            from: before,
                            to: fish.health,
                        });
                    }
                }
                None => {
                    log::warn!("feed: no fish with id '{fish_id}'");
                }
            },
            PlayerCommand::Select { fish_id } => {
                self.selected = Some(fish_id);
            }
            PlayerCommand::Deselect => {
                self.selected = None;
            }
        }

        self.persist_events(&events, "player", tick)?;
        Ok(events)
    }

    // ── Read accessors — pure, never mutate ────────────────────

    pub fn roster(&self) -> &[Fish] {
        self.registry.as_slice()
    }

    pub fn fish(&self, id: &str) -> Option<&Fish> {
        self.registry.get(id)
    }

    /// The selected fish, or None when nothing is selected or the
    /// selection has gone stale.
    pub fn selected_fish(&self) -> Option<&Fish> {
        self.selected.as_deref().and_then(|id| self.registry.get(id))
    }

    /// A sorted copy of the roster for display.
    pub fn sorted_roster(&self, state: SortState) -> Vec<Fish> {
        let mut fish = self.registry.to_vec();
        sort_fish(&mut fish, state);
        fish
    }

    pub fn speed(&self) -> SimSpeed {
        self.clock.speed
    }

    // ── Store queries (tests and tooling) ──────────────────────

    pub fn store_events_for_tick(&self, run_id: &str, tick: Tick) -> SimResult<Vec<EventLogEntry>> {
        self.store.events_for_tick(run_id, tick)
    }

    pub fn store_event_count(&self, run_id: &str, event_type: &str) -> SimResult<i64> {
        self.store.event_count(run_id, event_type)
    }

    pub fn store_latest_snapshot(&self, run_id: &str) -> SimResult<Option<(Tick, String)>> {
        self.store.latest_snapshot(run_id)
    }

    /// Restore clock, roster, and selection from the latest snapshot.
    /// Returns the restored tick, or None when no snapshot exists.
    pub fn restore_latest(&mut self) -> SimResult<Option<Tick>> {
        let Some((tick, json)) = self.store.latest_snapshot(&self.run_id)? else {
            return Ok(None);
        };
        let snapshot: SimSnapshot = serde_json::from_str(&json)?;
        self.clock = snapshot.clock;
        self.registry.restore(snapshot.fish);
        self.selected = snapshot.selected;
        Ok(Some(tick))
    }

    // ── Internals ──────────────────────────────────────────────

    fn persist_events(&self, events: &[SimEvent], subsystem: &str, tick: Tick) -> SimResult<()> {
        for event in events {
            let entry = EventLogEntry {
                id:         None,
                run_id:     self.run_id.clone(),
                tick,
                subsystem:  subsystem.to_string(),
                event_type: event_type_name(event).to_string(),
                payload:    serde_json::to_string(event)?,
            };
            self.store.append_event(&entry)?;
        }
        Ok(())
    }

    fn take_snapshot(&self, tick: Tick) -> SimResult<()> {
        let snapshot = SimSnapshot {
            run_id:   self.run_id.clone(),
            tick,
            clock:    self.clock.clone(),
            fish:     self.registry.to_vec(),
            selected: self.selected.clone(),
        };
        let json = serde_json::to_string(&snapshot)?;
        self.store.save_snapshot(&self.run_id, tick, &json)?;
        log::debug!("Snapshot saved at tick {tick}");
        Ok(())
    }
}
