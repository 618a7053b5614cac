//! Gem Hopper - a lane-crossing grid arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `config`: Construction-time game configuration
//! - `platform`: Input and rendering capabilities, terminal implementations
//! - `driver`: Frame loop tying input, simulation and rendering together
//! - `ui`: HUD and overlay text

pub mod config;
pub mod driver;
pub mod error;
pub mod platform;
pub mod sim;
pub mod ui;

pub use config::GameConfig;
pub use driver::GameLoop;
pub use error::{ConfigError, SimError};
pub use sim::{Action, GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    use crate::sim::IntRange;

    /// Enemy countdown burned per second of wall time
    pub const ENEMY_STEP_RATE: f32 = 4.0;
    /// Countdown drawn after each enemy column advance
    pub const ENEMY_SPEED_RANGE: IntRange = IntRange::fixed(1, 4);
    /// How far off the left edge a (re)spawned enemy waits
    pub const ENEMY_WRAP_OFFSET_RANGE: IntRange = IntRange::fixed(1, 4);

    /// Board rows
    pub const HAZARD_ROW: i32 = 0;
    pub const FIRST_LANE_ROW: i32 = 1;
    pub const LAST_LANE_ROW: i32 = 3;

    /// Tile size in pixels
    pub const CELL_WIDTH: f32 = 101.0;
    pub const CELL_HEIGHT: f32 = 73.0;

    /// Longest frame the driver will simulate in one tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
}
