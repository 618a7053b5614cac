//! Cell-equality collision detection
//!
//! Movement is purely on the grid, so two entities collide exactly when they
//! occupy the same cell.

use super::entity::{Collectible, Enemy, Entity, Player};
use super::grid::GridGeometry;

/// True iff both entities occupy the same cell
#[inline]
pub fn has_collision<A: Entity, B: Entity>(a: &A, b: &B) -> bool {
    a.cell() == b.cell()
}

/// Everything the player touched this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// The player shares a cell with an enemy
    pub enemy_hit: bool,
    /// The player stands in the hazard lane
    pub hazard: bool,
    /// Indices of collectibles under the player
    pub collected: Vec<usize>,
}

impl CollisionReport {
    /// Either loss condition fired; both end the game the same way
    pub fn is_fatal(&self) -> bool {
        self.enemy_hit || self.hazard
    }
}

/// Run every collision check for the current board
pub fn detect(
    player: &Player,
    enemies: &[Enemy],
    collectibles: &[Collectible],
    grid: &GridGeometry,
) -> CollisionReport {
    let enemy_hit = enemies.iter().any(|enemy| has_collision(player, enemy));
    let hazard = grid.is_hazard(player.cell());
    let collected = collectibles
        .iter()
        .enumerate()
        .filter(|(_, gem)| has_collision(player, *gem))
        .map(|(i, _)| i)
        .collect();

    CollisionReport {
        enemy_hit,
        hazard,
        collected,
    }
}
