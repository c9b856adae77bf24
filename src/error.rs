//! Error types

use thiserror::Error;

/// Errors raised when building a simulation from a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("playfield must be positive and finite, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    #[error("{entity} size must be positive and finite, got {width}x{height}")]
    InvalidSize {
        entity: &'static str,
        width: f32,
        height: f32,
    },
    #[error("player ({player_width} wide) does not fit in a playfield {width} wide")]
    PlayerTooWide { player_width: f32, width: f32 },
    #[error("{what} speed must be positive and finite, got {speed}")]
    InvalidSpeed { what: &'static str, speed: f32 },
    #[error("enemy speed range [{min}, {max}) is empty or not positive")]
    InvalidSpeedRange { min: f32, max: f32 },
    #[error("enemy speed {max} could carry an enemy past the player in one tick (limit {limit})")]
    EnemyTooFast { max: f32, limit: f32 },
    #[error("spawn probability {0} must be between 0.0 and 1.0")]
    InvalidSpawnProbability(f64),
    #[error("fire cooldown {0} ms must be non-negative and finite")]
    InvalidCooldown(f64),
    #[error("tick rate {0} Hz must be positive and finite")]
    InvalidTickRate(f64),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
