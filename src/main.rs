//! Star Strike headless runner
//!
//! Drives a session with a simple autopilot at a simulated display refresh
//! rate and prints the final snapshot as JSON.
//!
//! Usage: `star-strike [config.json] [seconds]`

use std::process::ExitCode;

use star_strike::sim::{BoundingBox, Snapshot};
use star_strike::{Game, GameConfig, TickInput, renderer};

/// Simulated display refresh (Hz), deliberately not the tick rate
const DISPLAY_HZ: f64 = 144.0;
const DEFAULT_SECONDS: f64 = 30.0;

/// Chase the lowest enemy and keep the trigger held
fn autopilot(snapshot: &Snapshot) -> TickInput {
    let target = snapshot
        .enemies
        .iter()
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(BoundingBox::center_x);

    let ship_x = snapshot.player.center_x();
    match target {
        Some(x) if x < ship_x - 4.0 => TickInput {
            move_left: true,
            fire: true,
            ..Default::default()
        },
        Some(x) if x > ship_x + 4.0 => TickInput {
            move_right: true,
            fire: true,
            ..Default::default()
        },
        _ => TickInput {
            fire: true,
            ..Default::default()
        },
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Star Strike (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let playfield = BoundingBox::new(0.0, 0.0, config.width, config.height);
    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let frames = (seconds * DISPLAY_HZ) as u64;
    let mut rounds = 1;
    let mut vertex_count = 0;
    for frame in 0..frames {
        let now_ms = frame as f64 * 1000.0 / DISPLAY_HZ;

        let snapshot = game.snapshot();
        if snapshot.game_over {
            log::info!("Round {} over with score {}", rounds, snapshot.score);
            rounds += 1;
            game.reset();
            continue;
        }

        game.set_input(autopilot(&snapshot));
        game.frame(now_ms);
        let mut vertices = renderer::build_frame(&game.snapshot(), playfield);
        renderer::shapes::to_clip_space(&mut vertices, playfield.max());
        vertex_count = renderer::as_bytes(&vertices).len() / renderer::Vertex::STRIDE;
    }
    game.stop();

    let snapshot = game.snapshot();
    log::info!(
        "Finished {} rounds, {} ticks in last round, {} vertices last frame",
        rounds,
        snapshot.tick,
        vertex_count
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
