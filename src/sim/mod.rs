//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod shooter;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use geometry::{BoundingBox, intersects};
pub use shooter::Shooter;
pub use snapshot::Snapshot;
pub use spawner::Spawner;
pub use state::{Enemy, Entity, EntityStore, GamePhase, Player, Projectile, SimulationState};
pub use tick::{Simulation, TickEvents, TickInput};
