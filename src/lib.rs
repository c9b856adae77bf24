//! Star Strike - a fixed-tick 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `scheduler`: Fixed-rate tick scheduling decoupled from display refresh
//! - `game`: Host-facing session tying input, scheduler and simulation together
//! - `renderer`: Snapshot to vertex conversion for whatever draws the frame
//! - `config`: Data-driven playfield and tuning values

pub mod config;
pub mod error;
pub mod game;
pub mod renderer;
pub mod scheduler;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;
pub use scheduler::FixedRateScheduler;
pub use sim::{Simulation, Snapshot, TickInput};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: f64 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the scheduler will accept (ms)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player ship defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Distance from the playfield bottom to the player's top edge
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 4.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_MIN_SPEED: f32 = 2.0;
    pub const ENEMY_MAX_SPEED: f32 = 4.0;

    /// Chance per tick that one enemy spawns
    pub const SPAWN_PROBABILITY: f64 = 0.02;
    /// Minimum wall-clock gap between shots (ms)
    pub const FIRE_COOLDOWN_MS: f64 = 250.0;
    /// Points per destroyed enemy
    pub const KILL_REWARD: u64 = 100;
}
