//! Discrete player actions and how each phase reacts to them

use serde::{Deserialize, Serialize};

use super::random::RandomProvider;
use super::state::{GamePhase, GameState};

/// Input vocabulary accepted by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Confirm,
}

impl Action {
    /// Map a key name to an action. Unknown keys map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "left" | "a" | "h" => Some(Action::MoveLeft),
            "right" | "d" | "l" => Some(Action::MoveRight),
            "up" | "w" | "k" => Some(Action::MoveUp),
            "down" | "s" | "j" => Some(Action::MoveDown),
            "enter" | "return" | "space" | "" => Some(Action::Confirm),
            _ => None,
        }
    }

    /// Grid offset for movement actions
    fn direction(&self) -> Option<(i32, i32)> {
        match self {
            Action::MoveLeft => Some((-1, 0)),
            Action::MoveRight => Some((1, 0)),
            Action::MoveUp => Some((0, -1)),
            Action::MoveDown => Some((0, 1)),
            Action::Confirm => None,
        }
    }
}

impl<R: RandomProvider> GameState<R> {
    /// Apply one action. Returns whether anything changed; actions that mean
    /// nothing in the current phase are ignored.
    pub fn handle_input(&mut self, action: Action) -> bool {
        match self.phase {
            GamePhase::Menu => match action {
                Action::MoveLeft => {
                    let before = self.player.skin_index;
                    self.player.prev_skin();
                    before != self.player.skin_index
                }
                Action::MoveRight => {
                    let before = self.player.skin_index;
                    let skin_count = self.config().skin_count();
                    self.player.next_skin(skin_count);
                    before != self.player.skin_index
                }
                Action::Confirm => {
                    log::info!("Starting as {}", self.skin_name());
                    self.set_phase(GamePhase::Playing);
                    true
                }
                Action::MoveUp | Action::MoveDown => false,
            },
            GamePhase::Playing => match action.direction() {
                Some((dcol, drow)) => {
                    let grid = *self.grid();
                    let before = self.player.cell;
                    self.player.step(dcol, drow, &grid);
                    before != self.player.cell
                }
                None => false,
            },
            GamePhase::GameOver => match action {
                Action::Confirm => {
                    self.reset();
                    true
                }
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::grid::Cell;

    fn playing() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.handle_input(Action::Confirm);
        state
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Action::from_key("left"), Some(Action::MoveLeft));
        assert_eq!(Action::from_key(" UP "), Some(Action::MoveUp));
        assert_eq!(Action::from_key("enter"), Some(Action::Confirm));
        assert_eq!(Action::from_key("s"), Some(Action::MoveDown));
        assert_eq!(Action::from_key("jump"), None);
    }

    #[test]
    fn test_menu_confirm_starts_playing() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        let enemies = state.enemies.clone();
        assert!(state.handle_input(Action::Confirm));
        assert_eq!(state.phase, GamePhase::Playing);
        // Entities built at menu entry are the ones played with
        assert_eq!(state.enemies, enemies);
    }

    #[test]
    fn test_menu_skin_selection_clamps() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        let skins = state.config().skin_count();
        for _ in 0..skins {
            state.handle_input(Action::MoveRight);
        }
        assert_eq!(state.player.skin_index, skins - 1);
        assert_eq!(state.skin_name(), "The princess");
        assert!(!state.handle_input(Action::MoveRight));
        assert_eq!(state.player.skin_index, skins - 1);

        state.handle_input(Action::MoveLeft);
        assert_eq!(state.player.skin_index, skins - 2);
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_menu_ignores_vertical_moves() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        assert!(!state.handle_input(Action::MoveUp));
        assert!(!state.handle_input(Action::MoveDown));
        assert_eq!(state.player.cell, Cell::new(2, 5));
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_playing_moves_clamp_to_board() {
        let mut state = playing();
        assert!(!state.handle_input(Action::MoveDown));
        assert_eq!(state.player.cell, Cell::new(2, 5));

        for _ in 0..5 {
            state.handle_input(Action::MoveRight);
        }
        assert_eq!(state.player.cell, Cell::new(4, 5));

        for _ in 0..10 {
            state.handle_input(Action::MoveUp);
        }
        // Water is reachable; entering it is judged on the next tick
        assert_eq!(state.player.cell, Cell::new(4, 0));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_playing_ignores_confirm_and_skin_keys() {
        let mut state = playing();
        assert!(!state.handle_input(Action::Confirm));
        assert_eq!(state.phase, GamePhase::Playing);
        state.handle_input(Action::MoveRight);
        assert_eq!(state.player.skin_index, 0);
    }

    #[test]
    fn test_game_over_only_accepts_confirm() {
        let mut state = playing();
        state.set_phase(GamePhase::GameOver);
        let cell = state.player.cell;
        for action in [Action::MoveLeft, Action::MoveRight, Action::MoveUp, Action::MoveDown] {
            assert!(!state.handle_input(action));
        }
        assert_eq!(state.player.cell, cell);
        assert_eq!(state.phase, GamePhase::GameOver);

        assert!(state.handle_input(Action::Confirm));
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
