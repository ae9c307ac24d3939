//! aquasim-core — a virtual fish-tank simulation engine.
//!
//! A simulated clock advances tank time at a selectable multiple of real
//! time; a fish roster loaded once from a JSON feed is fed, sorted, and
//! decays through health tiers according to each fish's feeding schedule.
//! Every tick runs the registered subsystems in fixed order and records
//! what happened in a SQLite event log.

pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod feeding;
pub mod fish;
pub mod health_subsystem;
pub mod registry;
pub mod roster_subsystem;
pub mod snapshot;
pub mod store;
pub mod subsystem;
pub mod types;
pub mod views;
