//! Simulation tick
//!
//! Advances enemies by the elapsed time, then resolves collisions. Only the
//! Playing phase simulates; Menu and GameOver are frozen.

use super::collision;
use super::entity::Entity;
use super::random::RandomProvider;
use super::spawner;
use super::state::{GamePhase, GameState};

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The simulation actually ran (phase was Playing)
    pub advanced: bool,
    /// Gems picked up this tick
    pub collected: u32,
    /// This tick ended the run
    pub game_over: bool,
}

impl<R: RandomProvider> GameState<R> {
    /// Advance the game by `dt` seconds of wall time
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        if self.phase != GamePhase::Playing {
            return TickOutcome::default();
        }

        // Negative, NaN and infinite frames count as no time
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let grid = *self.grid();

        for enemy in &mut self.enemies {
            enemy.update(dt, &grid, &mut self.rng);
        }

        let report = collision::detect(&self.player, &self.enemies, &self.collectibles, &grid);

        // Either loss freezes the board before any gem is counted
        if report.is_fatal() {
            if report.hazard {
                log::info!("Fell into the water at {:?}", self.player.cell);
            } else {
                log::info!("Caught by a bug at {:?}", self.player.cell);
            }
            self.set_phase(GamePhase::GameOver);
            log::info!("Final score: {}", self.player.score);
            return TickOutcome {
                advanced: true,
                collected: 0,
                game_over: true,
            };
        }

        let collected = report.collected.len() as u32;
        if collected > 0 {
            self.player.score += collected;
            log::debug!(
                "Collected {} gem(s) at {:?}, score {}",
                collected,
                self.player.cell,
                self.player.score
            );

            let survivors = std::mem::take(&mut self.collectibles)
                .into_iter()
                .enumerate()
                .filter(|(i, _)| !report.collected.contains(i))
                .map(|(_, gem)| gem)
                .collect();
            self.collectibles = spawner::fill(
                survivors,
                self.config().collectible_count,
                &grid,
                &mut self.rng,
            );
        }

        TickOutcome {
            advanced: true,
            collected,
            game_over: false,
        }
    }
}
