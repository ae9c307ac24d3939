//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick = one advancement of the tank clock.
pub type Tick = u64;

/// A stable, unique identifier for a fish in the tank.
pub type FishId = String;

/// The canonical run identifier.
pub type RunId = String;
