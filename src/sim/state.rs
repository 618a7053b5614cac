//! Game state and the top-level phase machine
//!
//! One `GameState` owns every entity, the score and the RNG. Input and ticks
//! mutate it through `handle_input` and `tick`; renderers read it.

use serde::{Deserialize, Serialize};

use super::entity::{Collectible, Enemy, Entity, Player, Sprite};
use super::grid::GridGeometry;
use super::random::{RandomProvider, SeededRandom};
use super::spawner;
use crate::config::GameConfig;
use crate::error::SimError;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; skin selection
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; simulation frozen until restart
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "Menu",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomProvider = SeededRandom> {
    config: GameConfig,
    /// Current phase
    pub phase: GamePhase,
    /// The player's character
    pub player: Player,
    /// Always `config.enemy_count` long
    pub enemies: Vec<Enemy>,
    /// Always `config.collectible_count` long, one per cell
    pub collectibles: Vec<Collectible>,
    pub(crate) rng: R,
}

impl GameState<SeededRandom> {
    /// Create a game in the menu, seeded for reproducibility
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SimError> {
        Self::with_random(config, SeededRandom::new(seed))
    }
}

impl<R: RandomProvider> GameState<R> {
    /// Create a game in the menu using the given random source
    pub fn with_random(config: GameConfig, rng: R) -> Result<Self, SimError> {
        config.validate()?;

        let mut state = Self {
            player: Player::new(&config.grid),
            config,
            phase: GamePhase::Menu,
            enemies: Vec::new(),
            collectibles: Vec::new(),
            rng,
        };
        state.populate();

        log::info!(
            "New game: {} enemies, {} gems, {}x{} board",
            state.config.enemy_count,
            state.config.collectible_count,
            state.config.grid.columns,
            state.config.grid.rows
        );
        Ok(state)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &GridGeometry {
        &self.config.grid
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Display name of the selected skin
    pub fn skin_name(&self) -> &str {
        self.config
            .skins
            .get(self.player.skin_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Rebuild the enemy and collectible sets from scratch
    fn populate(&mut self) {
        let grid = self.config.grid;
        self.enemies = (0..self.config.enemy_count)
            .map(|_| Enemy::spawn(&grid, &mut self.rng))
            .collect();
        self.collectibles = spawner::fill(
            Vec::new(),
            self.config.collectible_count,
            &grid,
            &mut self.rng,
        );
    }

    /// Full restart: fresh player position and score, fresh entities, playing
    pub fn reset(&mut self) {
        let grid = self.config.grid;
        self.player.reset(&grid);
        self.populate();
        self.set_phase(GamePhase::Playing);
        log::info!("Game reset");
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {} -> {}", self.phase.as_str(), phase.as_str());
            self.phase = phase;
        }
    }

    /// Sprites in draw order: gems, then enemies, then the player on top
    pub fn sprites(&self) -> Vec<Sprite> {
        let grid = self.grid();
        self.collectibles
            .iter()
            .map(|gem| gem.describe_for_render(grid))
            .chain(self.enemies.iter().map(|enemy| enemy.describe_for_render(grid)))
            .chain(std::iter::once(self.player.describe_for_render(grid)))
            .collect()
    }

    /// Serializable copy of everything a renderer shows
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.player.score,
            skin_name: self.skin_name().to_string(),
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            collectibles: self.collectibles.clone(),
        }
    }
}

/// Point-in-time view of a game, detached from its RNG
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub skin_name: String,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
}
