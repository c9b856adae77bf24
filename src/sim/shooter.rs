//! Rate-limited projectile emission

use super::geometry::BoundingBox;
use super::state::{Projectile, SimulationState};
use crate::config::GameConfig;

/// Fires from the player's nose while the fire intent is held,
/// no more often than the cooldown allows.
#[derive(Debug, Clone)]
pub struct Shooter {
    /// Wall-clock time of the last shot (ms)
    last_fire_ms: Option<f64>,
    cooldown_ms: f64,
    projectile_width: f32,
    projectile_height: f32,
    projectile_speed: f32,
}

impl Shooter {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            last_fire_ms: None,
            cooldown_ms: config.fire_cooldown_ms,
            projectile_width: config.projectile_width,
            projectile_height: config.projectile_height,
            projectile_speed: config.projectile_speed,
        }
    }

    /// Whether a shot at `now_ms` would be allowed
    pub fn ready(&self, now_ms: f64) -> bool {
        self.last_fire_ms
            .is_none_or(|last| now_ms - last > self.cooldown_ms)
    }

    /// Emit a projectile if `fire` is held and the cooldown has elapsed.
    /// Returns the new projectile's id.
    pub fn tick(&mut self, state: &mut SimulationState, fire: bool, now_ms: f64) -> Option<u64> {
        if !fire || !self.ready(now_ms) {
            return None;
        }
        self.last_fire_ms = Some(now_ms);

        let player = &state.player.bounds;
        let bounds = BoundingBox::new(
            player.center_x() - self.projectile_width / 2.0,
            player.y,
            self.projectile_width,
            self.projectile_height,
        );
        let id = state.next_entity_id();
        state
            .projectiles
            .push(Projectile::new(id, bounds, self.projectile_speed));
        log::debug!("Fired projectile {} at t={:.0}ms", id, now_ms);
        Some(id)
    }

    /// Forget the last shot
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }
}
