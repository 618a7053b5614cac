//! Entity models: enemies, collectible gems and the player
//!
//! All three share the [`Entity`] capability set. The core only ever calls
//! it through generics, so dispatch is static.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, GridGeometry};
use super::random::{IntRange, RandomProvider};
use crate::consts::{ENEMY_SPEED_RANGE, ENEMY_STEP_RATE, ENEMY_WRAP_OFFSET_RANGE};

/// Which image a renderer should draw for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    EnemyBug,
    Gem(CollectibleKind),
    /// Player character, by skin index
    Character(usize),
}

/// Render description of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: SpriteId,
    pub cell: Cell,
    /// Top-left pixel of the entity's tile
    pub pixel: Vec2,
}

/// Capability set shared by every board entity
pub trait Entity {
    /// Cell the entity currently occupies
    fn cell(&self) -> Cell;

    /// Advance the entity's own behavior by `dt` seconds
    fn update<R: RandomProvider>(&mut self, _dt: f32, _grid: &GridGeometry, _rng: &mut R) {}

    /// What a renderer needs to draw this entity
    fn describe_for_render(&self, grid: &GridGeometry) -> Sprite;
}

/// A bug running left to right along one of the stone lanes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub cell: Cell,
    /// Countdown until the next column advance
    pub speed: f32,
    pub sprite: SpriteId,
}

impl Enemy {
    /// New enemy waiting off the left edge in a random lane
    pub fn spawn<R: RandomProvider>(grid: &GridGeometry, rng: &mut R) -> Self {
        let col = -rng.sample(ENEMY_WRAP_OFFSET_RANGE);
        let row = rng.sample(grid.lane_range());
        let speed = rng.sample(ENEMY_SPEED_RANGE) as f32;
        Self {
            cell: Cell::new(col, row),
            speed,
            sprite: SpriteId::EnemyBug,
        }
    }

    /// Most countdown one update may burn: a slowest-speed lap from the
    /// farthest wrap offset to past the right edge
    fn max_burn(grid: &GridGeometry) -> f32 {
        let lap = grid.columns.max(0) + ENEMY_WRAP_OFFSET_RANGE.max();
        lap as f32 * ENEMY_SPEED_RANGE.max() as f32
    }

    /// Send the enemy back off the left edge in a freshly drawn lane
    fn wrap<R: RandomProvider>(&mut self, grid: &GridGeometry, rng: &mut R) {
        self.cell.col = -rng.sample(ENEMY_WRAP_OFFSET_RANGE);
        self.cell.row = rng.sample(grid.lane_range());
    }
}

impl Entity for Enemy {
    fn cell(&self) -> Cell {
        self.cell
    }

    fn update<R: RandomProvider>(&mut self, dt: f32, grid: &GridGeometry, rng: &mut R) {
        let max_burn = Self::max_burn(grid);
        let burn = if dt.is_finite() {
            (ENEMY_STEP_RATE * dt).clamp(0.0, max_burn)
        } else {
            0.0
        };
        self.speed = (self.speed - burn).max(-max_burn);

        // Overshoot carries into the next countdown, so one long frame
        // advances as far as several short ones
        while self.speed <= 0.0 {
            self.cell.col += 1;
            self.speed += rng.sample(ENEMY_SPEED_RANGE) as f32;

            if grid.is_past_right_edge(self.cell) {
                self.wrap(grid, rng);
            }
        }
    }

    fn describe_for_render(&self, grid: &GridGeometry) -> Sprite {
        Sprite {
            id: self.sprite,
            cell: self.cell,
            pixel: grid.cell_to_pixel(self.cell),
        }
    }
}

/// Gem colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectibleKind {
    Blue,
    Green,
    Orange,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] = [
        CollectibleKind::Blue,
        CollectibleKind::Green,
        CollectibleKind::Orange,
    ];

    const RANGE: IntRange = IntRange::fixed(0, Self::ALL.len() as i32 - 1);

    /// Uniformly random gem color
    pub fn random<R: RandomProvider>(rng: &mut R) -> Self {
        Self::ALL[rng.sample(Self::RANGE) as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectibleKind::Blue => "Blue",
            CollectibleKind::Green => "Green",
            CollectibleKind::Orange => "Orange",
        }
    }
}

/// A gem sitting on a lane cell until the player picks it up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    pub cell: Cell,
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn new(cell: Cell, kind: CollectibleKind) -> Self {
        Self { cell, kind }
    }
}

impl Entity for Collectible {
    fn cell(&self) -> Cell {
        self.cell
    }

    fn describe_for_render(&self, grid: &GridGeometry) -> Sprite {
        Sprite {
            id: SpriteId::Gem(self.kind),
            cell: self.cell,
            pixel: grid.cell_to_pixel(self.cell),
        }
    }
}

/// The player's character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub cell: Cell,
    pub score: u32,
    /// Selected skin, always `< skin_count`
    pub skin_index: usize,
}

impl Player {
    pub fn new(grid: &GridGeometry) -> Self {
        Self {
            cell: grid.start_cell(),
            score: 0,
            skin_index: 0,
        }
    }

    /// Back to the start cell with zero score. The skin choice is kept.
    pub fn reset(&mut self, grid: &GridGeometry) {
        self.cell = grid.start_cell();
        self.score = 0;
    }

    /// Move one cell, clamped to the board
    pub fn step(&mut self, dcol: i32, drow: i32, grid: &GridGeometry) {
        self.cell = grid.clamp_player(self.cell.offset(dcol, drow));
    }

    /// Select the next skin; stops at the last one
    pub fn next_skin(&mut self, skin_count: usize) {
        if self.skin_index + 1 < skin_count {
            self.skin_index += 1;
        }
    }

    /// Select the previous skin; stops at the first one
    pub fn prev_skin(&mut self) {
        self.skin_index = self.skin_index.saturating_sub(1);
    }
}

impl Entity for Player {
    fn cell(&self) -> Cell {
        self.cell
    }

    fn describe_for_render(&self, grid: &GridGeometry) -> Sprite {
        Sprite {
            id: SpriteId::Character(self.skin_index),
            cell: self.cell,
            pixel: grid.cell_to_pixel(self.cell),
        }
    }
}
