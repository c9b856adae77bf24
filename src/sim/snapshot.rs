//! Read-only view of the simulation for rendering and UI

use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;
use super::state::{Entity, SimulationState};

/// Immutable copy of everything a renderer or HUD needs.
/// Only active entities are included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: BoundingBox,
    pub projectiles: Vec<BoundingBox>,
    pub enemies: Vec<BoundingBox>,
    pub score: u64,
    pub high_score: u64,
    pub game_over: bool,
    pub tick: u64,
}

impl Snapshot {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            player: state.player.bounds,
            projectiles: state.projectiles.active().map(|p| *p.bounds()).collect(),
            enemies: state.enemies.active().map(|e| *e.bounds()).collect(),
            score: state.score,
            high_score: state.high_score,
            game_over: state.is_game_over(),
            tick: state.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{Enemy, Projectile};

    #[test]
    fn test_snapshot_skips_inactive() {
        let mut state = SimulationState::new(&GameConfig::default());
        state
            .enemies
            .push(Enemy::new(1, BoundingBox::new(0.0, 0.0, 30.0, 30.0), 2.0));
        let mut dead = Enemy::new(2, BoundingBox::new(50.0, 0.0, 30.0, 30.0), 2.0);
        dead.deactivate();
        state.enemies.push(dead);
        state
            .projectiles
            .push(Projectile::new(3, BoundingBox::new(10.0, 10.0, 4.0, 10.0), 10.0));

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.enemies, vec![BoundingBox::new(0.0, 0.0, 30.0, 30.0)]);
        assert_eq!(snap.projectiles.len(), 1);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SimulationState::new(&GameConfig::default());
        let json = serde_json::to_string(&Snapshot::capture(&state)).unwrap();
        assert!(json.contains("\"high_score\":0"));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Snapshot::capture(&state));
    }
}
