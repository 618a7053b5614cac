//! Collectible (re)population by rejection sampling
//!
//! Guarantees that no two collectibles share a cell and that every new one
//! lands on a lane cell.

use super::entity::{Collectible, CollectibleKind};
use super::grid::{Cell, GridGeometry};
use super::random::RandomProvider;
use crate::error::SimError;

/// Fill `existing` up to `target` collectibles.
///
/// Survivors keep their cells and order; new gems go to uniformly random
/// lane cells not already taken. Fails if `target` cannot fit on the lanes.
pub fn replenish<R: RandomProvider>(
    existing: Vec<Collectible>,
    target: usize,
    grid: &GridGeometry,
    rng: &mut R,
) -> Result<Vec<Collectible>, SimError> {
    let capacity = grid.lane_capacity();
    if target > capacity {
        return Err(SimError::InvalidConfiguration(format!(
            "{target} collectibles do not fit in {capacity} lane cells"
        )));
    }

    // Survivors placed off the lanes do not use up lane cells
    let lane_survivors = existing.iter().filter(|c| grid.is_lane(c.cell)).count();
    let free_lane_cells = capacity.saturating_sub(lane_survivors);
    let needed = target.saturating_sub(existing.len());
    if needed > free_lane_cells {
        return Err(SimError::InvalidConfiguration(format!(
            "{needed} new collectibles do not fit in {free_lane_cells} free lane cells"
        )));
    }

    Ok(fill(existing, target, grid, rng))
}

/// Rejection-sampling core of [`replenish`]. Callers guarantee the free lane
/// cells can hold `target`; the game state does so by validating its config.
pub(crate) fn fill<R: RandomProvider>(
    mut existing: Vec<Collectible>,
    target: usize,
    grid: &GridGeometry,
    rng: &mut R,
) -> Vec<Collectible> {
    let columns = grid.column_range();
    let lanes = grid.lane_range();
    while existing.len() < target {
        let candidate = Cell::new(rng.sample(columns), rng.sample(lanes));
        if existing.iter().any(|gem| gem.cell == candidate) {
            continue;
        }
        let kind = CollectibleKind::random(rng);
        log::trace!("placed {} gem at {:?}", kind.as_str(), candidate);
        existing.push(Collectible::new(candidate, kind));
    }
    existing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SeededRandom;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_fills_empty_board() {
        let grid = GridGeometry::default();
        let mut rng = SeededRandom::new(42);
        let gems = replenish(Vec::new(), 3, &grid, &mut rng).unwrap();
        assert_eq!(gems.len(), 3);
        assert!(gems.iter().all(|g| grid.is_lane(g.cell)));
    }

    #[test]
    fn test_keeps_survivors_in_order() {
        let grid = GridGeometry::default();
        let mut rng = SeededRandom::new(8);
        let survivors = vec![
            Collectible::new(Cell::new(4, 3), CollectibleKind::Blue),
            Collectible::new(Cell::new(0, 1), CollectibleKind::Orange),
        ];
        let gems = replenish(survivors.clone(), 5, &grid, &mut rng).unwrap();
        assert_eq!(gems.len(), 5);
        assert_eq!(&gems[..2], &survivors[..]);
    }

    #[test]
    fn test_full_board_terminates() {
        let grid = GridGeometry::default();
        let mut rng = SeededRandom::new(3);
        let gems = replenish(Vec::new(), 15, &grid, &mut rng).unwrap();
        let cells: HashSet<Cell> = gems.iter().map(|g| g.cell).collect();
        assert_eq!(cells.len(), 15);
    }

    #[test]
    fn test_rejects_target_over_capacity() {
        let grid = GridGeometry::default();
        let mut rng = SeededRandom::new(3);
        let err = replenish(Vec::new(), 16, &grid, &mut rng).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_already_full_is_untouched() {
        let grid = GridGeometry::default();
        let mut rng = SeededRandom::new(3);
        let gems = vec![Collectible::new(Cell::new(2, 5), CollectibleKind::Blue)];
        let out = replenish(gems.clone(), 1, &grid, &mut rng).unwrap();
        assert_eq!(out, gems);
    }

    proptest! {
        #[test]
        fn prop_replenish_unique_lane_cells(
            seed in any::<u64>(),
            target in 1usize..=15,
            keep in 0usize..=15,
        ) {
            let grid = GridGeometry::default();
            let mut rng = SeededRandom::new(seed);
            let full = replenish(Vec::new(), target, &grid, &mut rng).unwrap();
            // Drop some, as if consumed, then refill
            let survivors: Vec<Collectible> = full.into_iter().take(keep.min(target)).collect();
            let gems = replenish(survivors, target, &grid, &mut rng).unwrap();

            prop_assert_eq!(gems.len(), target);
            let cells: HashSet<Cell> = gems.iter().map(|g| g.cell).collect();
            prop_assert_eq!(cells.len(), target);
            for gem in &gems {
                prop_assert!(grid.is_lane(gem.cell));
            }
        }
    }
}
