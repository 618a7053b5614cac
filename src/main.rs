//! Gem Hopper entry point
//!
//! Native terminal build: arrow keys (or wasd/hjkl) move, Enter starts and
//! restarts, `q` or Esc quits.
//!
//! Usage: `gem-hopper [config.json]`. Set `GEM_HOPPER_SEED` to replay a run.

use std::error::Error;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use gem_hopper::platform::{KeyboardInput, TerminalSession, TextRenderer};
use gem_hopper::{GameConfig, GameLoop, GameState};

/// Target frame pacing (~30 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn seed_from_env_or_clock() -> u64 {
    if let Ok(value) = std::env::var("GEM_HOPPER_SEED") {
        match value.parse() {
            Ok(seed) => return seed,
            Err(e) => log::warn!("Ignoring GEM_HOPPER_SEED={:?}: {}", value, e),
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Gem Hopper starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let seed = seed_from_env_or_clock();
    let state = GameState::new(config, seed)?;
    log::info!("Game initialized with seed: {}", seed);

    // Restores the terminal on every exit path, including errors below
    let session = TerminalSession::enter()?;
    let mut game = GameLoop::new(state, KeyboardInput::new(), TextRenderer::new(std::io::stdout()));

    let mut last = Instant::now();
    while game.is_running() {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        game.frame(dt)?;
        std::thread::sleep(FRAME_INTERVAL);
    }

    let state = game.into_state();
    drop(session);
    log::info!("Bye! Final score: {}", state.score());
    Ok(())
}
