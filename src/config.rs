//! Playfield and tuning configuration
//!
//! Loaded from JSON; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation configuration, validated once at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal speed (units per tick)
    pub player_speed: f32,
    /// Distance from playfield bottom to the player's top edge
    pub player_bottom_offset: f32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
    /// Minimum time between shots (ms, wall clock)
    pub fire_cooldown_ms: f64,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    /// Enemy speed is drawn uniformly from [min, max)
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    /// Chance per tick that one enemy spawns
    pub spawn_probability: f64,

    // === Rules ===
    pub kill_reward: u64,
    /// Simulation ticks per second
    pub tick_rate: f64,
    /// Spawner RNG seed
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_min_speed: ENEMY_MIN_SPEED,
            enemy_max_speed: ENEMY_MAX_SPEED,
            spawn_probability: SPAWN_PROBABILITY,

            kill_reward: KILL_REWARD,
            tick_rate: TICK_RATE,
            seed: 0,
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl GameConfig {
    /// Default config with a custom playfield size
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would produce undefined motion
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::InvalidPlayfield {
                width: self.width,
                height: self.height,
            });
        }

        for (entity, width, height) in [
            ("player", self.player_width, self.player_height),
            ("projectile", self.projectile_width, self.projectile_height),
            ("enemy", self.enemy_width, self.enemy_height),
        ] {
            if !positive(width) || !positive(height) {
                return Err(ConfigError::InvalidSize {
                    entity,
                    width,
                    height,
                });
            }
        }

        if self.player_width > self.width {
            return Err(ConfigError::PlayerTooWide {
                player_width: self.player_width,
                width: self.width,
            });
        }

        if !positive(self.player_speed) {
            return Err(ConfigError::InvalidSpeed {
                what: "player",
                speed: self.player_speed,
            });
        }
        if !positive(self.projectile_speed) {
            return Err(ConfigError::InvalidSpeed {
                what: "projectile",
                speed: self.projectile_speed,
            });
        }
        if !positive(self.enemy_min_speed)
            || !self.enemy_max_speed.is_finite()
            || self.enemy_max_speed <= self.enemy_min_speed
        {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.enemy_min_speed,
                max: self.enemy_max_speed,
            });
        }

        // Enemies move by whole steps; anything faster than the combined
        // heights can hop over the player between two ticks
        let limit = self.player_height + self.enemy_height;
        if self.enemy_max_speed > limit {
            return Err(ConfigError::EnemyTooFast {
                max: self.enemy_max_speed,
                limit,
            });
        }

        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::InvalidSpawnProbability(self.spawn_probability));
        }
        if !self.fire_cooldown_ms.is_finite() || self.fire_cooldown_ms < 0.0 {
            return Err(ConfigError::InvalidCooldown(self.fire_cooldown_ms));
        }
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::InvalidTickRate(self.tick_rate));
        }

        Ok(())
    }

    /// Player spawn position (horizontally centered, offset from the bottom)
    pub fn player_start(&self) -> (f32, f32) {
        (
            self.width / 2.0 - self.player_width / 2.0,
            self.height - self.player_bottom_offset,
        )
    }
}
