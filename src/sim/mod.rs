//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Grid cells only, no pixel movement
//! - Seeded RNG only
//! - Stable iteration order (enemies and gems keep their slots)
//! - No rendering or platform dependencies

pub mod action;
pub mod collision;
pub mod entity;
pub mod grid;
pub mod random;
pub mod spawner;
pub mod state;
pub mod tick;

pub use action::Action;
pub use collision::{CollisionReport, detect, has_collision};
pub use entity::{Collectible, CollectibleKind, Enemy, Entity, Player, Sprite, SpriteId};
pub use grid::{Cell, GridGeometry};
pub use random::{IntRange, RandomProvider, SeededRandom};
pub use spawner::replenish;
pub use state::{GamePhase, GameState, Snapshot};
pub use tick::TickOutcome;
