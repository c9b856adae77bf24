//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Player was hit; frozen until reset
    GameOver,
}

/// Common behavior of the moving, destructible entities
pub trait Entity {
    fn id(&self) -> u64;
    fn bounds(&self) -> &BoundingBox;
    fn is_active(&self) -> bool;
    fn deactivate(&mut self);
    /// Apply one tick of velocity
    fn advance(&mut self);
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub bounds: BoundingBox,
    /// Horizontal speed (units per tick)
    pub speed: f32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.player_start();
        Self {
            bounds: BoundingBox::new(x, y, config.player_width, config.player_height),
            speed: config.player_speed,
        }
    }

    /// Move by `direction * speed`, clamped to [0, max_x]
    pub fn move_horizontal(&mut self, direction: f32, playfield_width: f32) {
        let max_x = playfield_width - self.bounds.width;
        self.bounds.x = (self.bounds.x + direction * self.speed).clamp(0.0, max_x);
    }
}

/// A shot travelling up the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub bounds: BoundingBox,
    pub vel: Vec2,
    pub active: bool,
}

impl Projectile {
    pub fn new(id: u64, bounds: BoundingBox, speed: f32) -> Self {
        Self {
            id,
            bounds,
            vel: Vec2::new(0.0, -speed),
            active: true,
        }
    }
}

impl Entity for Projectile {
    fn id(&self) -> u64 {
        self.id
    }
    fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
    fn advance(&mut self) {
        self.bounds.translate(self.vel);
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u64,
    pub bounds: BoundingBox,
    pub vel: Vec2,
    pub active: bool,
}

impl Enemy {
    pub fn new(id: u64, bounds: BoundingBox, speed: f32) -> Self {
        Self {
            id,
            bounds,
            vel: Vec2::new(0.0, speed),
            active: true,
        }
    }

    /// Downward speed (units per tick)
    pub fn speed(&self) -> f32 {
        self.vel.y
    }
}

impl Entity for Enemy {
    fn id(&self) -> u64 {
        self.id
    }
    fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
    fn is_active(&self) -> bool {
        self.active
    }
    fn deactivate(&mut self) {
        self.active = false;
    }
    fn advance(&mut self) {
        self.bounds.translate(self.vel);
    }
}

/// Ordered collection of live entities of one kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore<T> {
    items: Vec<T>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: T) {
        self.items.push(entity);
    }

    /// Advance every active entity by its velocity
    pub fn advance_all(&mut self) {
        for entity in self.items.iter_mut().filter(|e| e.is_active()) {
            entity.advance();
        }
    }

    /// Drop inactive entities, returning how many were removed
    pub fn prune_inactive(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|e| e.is_active());
        before - self.items.len()
    }

    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|e| e.is_active())
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub player: Player,
    /// Shots in spawn order
    pub projectiles: EntityStore<Projectile>,
    /// Enemies in spawn order
    pub enemies: EntityStore<Enemy>,
    pub score: u64,
    /// Best score this process has seen; survives reset
    pub high_score: u64,
    pub phase: GamePhase,
    /// Ticks processed while running
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u64,
}

impl SimulationState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config),
            projectiles: EntityStore::new(),
            enemies: EntityStore::new(),
            score: 0,
            high_score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID. IDs are never reused, even across resets.
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Return to a fresh round. High score and the ID counter carry over.
    pub fn reset(&mut self, config: &GameConfig) {
        self.player = Player::new(config);
        self.projectiles.clear();
        self.enemies.clear();
        self.score = 0;
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
    }

    /// Remove inactive entities from both stores
    pub fn prune_inactive(&mut self) {
        self.projectiles.prune_inactive();
        self.enemies.prune_inactive();
    }
}
