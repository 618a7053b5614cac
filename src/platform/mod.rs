//! Platform abstraction layer
//!
//! The simulation consumes two capabilities from the outside world:
//! - [`InputSource`]: turns raw key presses into [`Action`]s
//! - [`Renderer`]: draws a [`GameState`] every frame
//!
//! Native terminal implementations live in the submodules.

pub mod input;
pub mod terminal;

pub use input::{KeyInput, KeyboardInput, QueuedInput, map_key};
pub use terminal::{TerminalSession, TextRenderer};

use crate::sim::{Action, GameState, RandomProvider};

/// Source of discrete player actions
pub trait InputSource {
    /// Every action queued since the last call, oldest first
    fn drain(&mut self) -> Vec<Action>;

    /// The source will never produce input again (player quit, input failed)
    fn is_closed(&self) -> bool {
        false
    }
}

/// Draws the current game
pub trait Renderer {
    type Error;

    fn render<R: RandomProvider>(&mut self, state: &GameState<R>) -> Result<(), Self::Error>;
}
