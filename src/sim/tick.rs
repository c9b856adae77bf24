//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::geometry::{BoundingBox, intersects};
use super::shooter::Shooter;
use super::snapshot::Snapshot;
use super::spawner::Spawner;
use super::state::{Entity, GamePhase, SimulationState};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Input intents for a single tick (held controls)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

impl TickInput {
    /// -1, 0 or 1. Both or neither held cancels out.
    pub fn horizontal(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEvents {
    /// (projectile id, enemy id) pairs destroyed this tick
    pub kills: Vec<(u64, u64)>,
    /// Enemies that reached the player
    pub player_hits: Vec<u64>,
    pub spawned: Option<u64>,
    pub fired: Option<u64>,
    /// Score gained this tick
    pub points: u64,
    /// This tick ended the round
    pub game_over: bool,
}

/// Owns the simulation state plus the stateful spawner and shooter
#[derive(Debug, Clone)]
pub struct Simulation {
    config: GameConfig,
    state: SimulationState,
    spawner: Spawner,
    shooter: Shooter,
}

impl Simulation {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Simulation created: {}x{} playfield, seed {}",
            config.width,
            config.height,
            config.seed
        );
        Ok(Self {
            state: SimulationState::new(&config),
            spawner: Spawner::new(&config),
            shooter: Shooter::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Latest committed state, valid until the next tick
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Start a new round. The high score is kept.
    pub fn reset(&mut self) {
        self.state.reset(&self.config);
        self.shooter.reset();
        log::info!("Round reset (high score {})", self.state.high_score);
    }

    /// Advance the game by one tick. `now_ms` is the wall clock used for
    /// the fire cooldown.
    pub fn tick(&mut self, input: &TickInput, now_ms: f64) -> TickEvents {
        let mut events = TickEvents::default();

        // Frozen until reset
        if self.state.phase == GamePhase::GameOver {
            return events;
        }

        let state = &mut self.state;
        state.prune_inactive();
        state.time_ticks += 1;

        // Player movement
        state
            .player
            .move_horizontal(input.horizontal(), self.config.width);

        // Advance projectiles and enemies, remembering where shots started
        let shot_origins: Vec<BoundingBox> = state.projectiles.iter().map(|p| p.bounds).collect();
        state.projectiles.advance_all();
        state.enemies.advance_all();

        // A shot stays live while any part of it is still on screen
        for projectile in state.projectiles.iter_mut() {
            if projectile.bounds.bottom() <= 0.0 {
                projectile.deactivate();
            }
        }
        let height = self.config.height;
        for enemy in state.enemies.iter_mut() {
            if enemy.bounds.y >= height {
                enemy.deactivate();
            }
        }

        // Collisions are tested against the path each shot swept this tick
        let sweeps: Vec<BoundingBox> = shot_origins
            .iter()
            .zip(state.projectiles.iter())
            .map(|(from, p)| from.union(&p.bounds))
            .collect();
        resolve_collisions(state, &sweeps, self.config.kill_reward, &mut events);

        events.spawned = self.spawner.tick(state, self.config.width);
        events.fired = self.shooter.tick(state, input.fire, now_ms);

        if events.game_over {
            // Frozen from here on, so nothing inactive may linger
            state.prune_inactive();
            log::info!(
                "Game over at tick {}: score {}, high score {}",
                state.time_ticks,
                state.score,
                state.high_score
            );
        }

        events
    }
}

/// Resolve enemy/player and enemy/projectile overlaps.
///
/// Enemies are visited in store order. An enemy touching the player ends the
/// round and is not paired with any projectile. Otherwise it pairs with the
/// first active projectile whose sweep overlaps it; both are deactivated and
/// the reward is added. Each entity pairs at most once.
fn resolve_collisions(
    state: &mut SimulationState,
    sweeps: &[BoundingBox],
    reward: u64,
    events: &mut TickEvents,
) {
    let player = state.player.bounds;

    for enemy in state.enemies.iter_mut() {
        if !enemy.active {
            continue;
        }

        if intersects(&player, &enemy.bounds) {
            events.player_hits.push(enemy.id);
            continue;
        }

        let hit = state
            .projectiles
            .iter_mut()
            .zip(sweeps)
            .find(|(p, sweep)| p.active && intersects(sweep, &enemy.bounds));

        if let Some((projectile, _)) = hit {
            projectile.deactivate();
            enemy.deactivate();
            events.kills.push((projectile.id, enemy.id));
            events.points += reward;
            log::debug!("Projectile {} destroyed enemy {}", projectile.id, enemy.id);
        }
    }

    state.score += events.points;

    if !events.player_hits.is_empty() {
        state.phase = GamePhase::GameOver;
        state.high_score = state.high_score.max(state.score);
        events.game_over = true;
    }
}
