//! Probabilistic enemy spawning

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::BoundingBox;
use super::state::{Enemy, SimulationState};
use crate::config::GameConfig;

/// Rolls once per tick; spawns at most one enemy
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    probability: f64,
    enemy_width: f32,
    enemy_height: f32,
    min_speed: f32,
    max_speed: f32,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(config.seed),
            probability: config.spawn_probability,
            enemy_width: config.enemy_width,
            enemy_height: config.enemy_height,
            min_speed: config.enemy_min_speed,
            max_speed: config.enemy_max_speed,
        }
    }

    /// One spawn roll. Pushes the new enemy into `state` and returns its id.
    pub fn tick(&mut self, state: &mut SimulationState, playfield_width: f32) -> Option<u64> {
        if self.rng.random::<f64>() >= self.probability {
            return None;
        }

        let max_x = (playfield_width - self.enemy_width).max(0.0);
        let x = self.rng.random::<f32>() * max_x;
        let speed = self.rng.random_range(self.min_speed..self.max_speed);

        let id = state.next_entity_id();
        let bounds = BoundingBox::new(x, -self.enemy_height, self.enemy_width, self.enemy_height);
        state.enemies.push(Enemy::new(id, bounds, speed));
        log::debug!("Spawned enemy {} at x={:.1} speed={:.2}", id, x, speed);
        Some(id)
    }
}
