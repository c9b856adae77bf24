//! Game session: the piece a host (browser, window, terminal) drives
//!
//! The host forwards held controls with [`Game::set_input`], calls
//! [`Game::frame`] from its display callback, and reads [`Game::snapshot`]
//! to draw. The simulation itself only advances on scheduler ticks.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::scheduler::FixedRateScheduler;
use crate::sim::{GamePhase, Simulation, SimulationState, Snapshot, TickInput};

/// Game instance holding all state
pub struct Game {
    sim: Simulation,
    scheduler: FixedRateScheduler,
    input: TickInput,
    /// Track phase for logging transitions
    last_phase: GamePhase,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let scheduler = FixedRateScheduler::new(config.tick_rate);
        let sim = Simulation::new(config)?;
        Ok(Self {
            sim,
            scheduler,
            input: TickInput::default(),
            last_phase: GamePhase::Running,
        })
    }

    /// Replace the held controls; they apply to every tick until changed
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    /// Run simulation ticks owed at display time `now_ms`.
    /// Returns the number of ticks run.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let Self {
            sim,
            scheduler,
            input,
            ..
        } = self;
        let ticks = scheduler.advance(now_ms, || {
            sim.tick(input, now_ms);
        });

        let current_phase = self.sim.state().phase;
        if current_phase != self.last_phase {
            log::info!("Phase {:?} -> {:?}", self.last_phase, current_phase);
            self.last_phase = current_phase;
        }

        ticks
    }

    /// Restart the round (the "Play Again" button)
    pub fn reset(&mut self) {
        self.sim.reset();
        self.last_phase = self.sim.state().phase;
    }

    /// Stop scheduling ticks; the last state stays readable
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Borrow the latest committed state
    pub fn state(&self) -> &SimulationState {
        self.sim.state()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn scheduler(&self) -> &FixedRateScheduler {
        &self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::BoundingBox;
    use crate::sim::state::Enemy;

    fn quiet_game() -> Game {
        Game::new(GameConfig {
            spawn_probability: 0.0,
            tick_rate: 100.0,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            player_speed: 0.0,
            ..Default::default()
        };
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn test_held_input_applies_each_tick() {
        let mut game = quiet_game();
        game.set_input(TickInput {
            move_right: true,
            ..Default::default()
        });
        game.frame(0.0);
        game.frame(30.0);
        // 1 + 3 ticks at 8 units each
        assert_eq!(game.state().player.bounds.x, 380.0 + 4.0 * 8.0);
    }

    #[test]
    fn test_ticks_independent_of_frame_rate() {
        let mut fast = quiet_game();
        let mut slow = quiet_game();
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        fast.set_input(right);
        slow.set_input(right);

        fast.frame(0.0);
        slow.frame(0.0);
        for f in 1..=40 {
            fast.frame(f as f64 * 5.0);
        }
        for f in 1..=5 {
            slow.frame(f as f64 * 40.0);
        }
        assert_eq!(fast.state().time_ticks, slow.state().time_ticks);
        assert_eq!(fast.snapshot(), slow.snapshot());
    }

    #[test]
    fn test_fire_cooldown_uses_frame_clock() {
        // Tall playfield so no shot leaves the top during the test
        let mut game = Game::new(GameConfig {
            spawn_probability: 0.0,
            tick_rate: 100.0,
            ..GameConfig::with_playfield(800.0, 2000.0)
        })
        .unwrap();
        game.set_input(TickInput {
            fire: true,
            ..Default::default()
        });
        for f in 0..=100 {
            game.frame(f as f64 * 10.0);
        }
        // 1 second of held fire: shots at 0, 260, 520, 780
        let fired = game.state().projectiles.len();
        assert_eq!(fired, 4);
    }

    #[test]
    fn test_stop_freezes_state() {
        let mut game = quiet_game();
        game.set_input(TickInput {
            move_left: true,
            ..Default::default()
        });
        game.frame(0.0);
        game.stop();
        let before = game.snapshot();
        assert_eq!(game.frame(1000.0), 0);
        assert_eq!(game.snapshot(), before);
        assert!(!game.is_running());
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut game = quiet_game();
        let player = game.state().player.bounds;
        {
            let state = game.sim.state_mut();
            state.score = 700;
            let id = state.next_entity_id();
            state.enemies.push(Enemy::new(
                id,
                BoundingBox::new(player.x, player.y, 30.0, 30.0),
                2.0,
            ));
        }
        game.frame(0.0);
        assert!(game.snapshot().game_over);
        assert_eq!(game.snapshot().high_score, 700);

        game.reset();
        let snap = game.snapshot();
        assert!(!snap.game_over);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 700);
        assert!(snap.enemies.is_empty());
    }
}
