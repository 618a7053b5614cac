//! Frame driver
//!
//! Each frame drains queued input into the game, ticks the simulation with
//! the elapsed time, then renders. Input is always applied before the tick
//! that observes it.

use crate::consts::MAX_FRAME_DT;
use crate::platform::{InputSource, Renderer};
use crate::sim::{GameState, RandomProvider, SeededRandom, TickOutcome};

/// Owns the single game state and the capabilities around it
pub struct GameLoop<I, D, R: RandomProvider = SeededRandom> {
    state: GameState<R>,
    input: I,
    renderer: D,
    frames: u64,
}

impl<I: InputSource, D: Renderer, R: RandomProvider> GameLoop<I, D, R> {
    pub fn new(state: GameState<R>, input: I, renderer: D) -> Self {
        Self {
            state,
            input,
            renderer,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// False once the input source has closed
    pub fn is_running(&self) -> bool {
        !self.input.is_closed()
    }

    /// Run one frame with `dt` seconds elapsed since the previous one
    pub fn frame(&mut self, dt: f32) -> Result<TickOutcome, D::Error> {
        for action in self.input.drain() {
            self.state.handle_input(action);
        }

        // Long stalls (debugger, suspended terminal) must not teleport bugs
        let outcome = self.state.tick(dt.min(MAX_FRAME_DT));
        if outcome.game_over {
            log::info!("Game over after {} frames", self.frames);
        }

        self.renderer.render(&self.state)?;
        self.frames += 1;
        Ok(outcome)
    }

    /// Tear down, returning the final state
    pub fn into_state(self) -> GameState<R> {
        self.state
    }
}
