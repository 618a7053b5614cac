//! Screen text for the HUD and phase overlays
//!
//! Renderers decide fonts and placement; this module only decides what is
//! said on each screen.

use crate::sim::{GamePhase, GameState, RandomProvider};

/// Game title shown on the menu
pub const TITLE: &str = "GEM HOPPER";

/// How prominently a line should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

/// One line of overlay text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLine {
    pub text: String,
    pub size: TextSize,
}

impl OverlayLine {
    fn new(text: impl Into<String>, size: TextSize) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }
}

/// Text drawn on top of the board for the current phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Menu(Vec<OverlayLine>),
    GameOver(Vec<OverlayLine>),
}

impl Overlay {
    pub fn for_state<R: RandomProvider>(state: &GameState<R>) -> Self {
        match state.phase {
            GamePhase::Playing => Overlay::None,
            GamePhase::Menu => Overlay::Menu(vec![
                OverlayLine::new(TITLE, TextSize::Large),
                OverlayLine::new(
                    "Get as many points as possible collecting gems",
                    TextSize::Small,
                ),
                OverlayLine::new("but be careful, evil bugs are on the hunt!", TextSize::Small),
                OverlayLine::new(
                    "Stay away from the water, your character cannot swim.",
                    TextSize::Small,
                ),
                OverlayLine::new("PLAY AS", TextSize::Small),
                OverlayLine::new(state.skin_name(), TextSize::Large),
                OverlayLine::new(
                    "(select your character by pressing left or right)",
                    TextSize::Small,
                ),
                OverlayLine::new("PRESS ENTER TO START", TextSize::Medium),
            ]),
            GamePhase::GameOver => Overlay::GameOver(vec![
                OverlayLine::new("GAME OVER", TextSize::Large),
                OverlayLine::new(score_line(state.score()), TextSize::Medium),
                OverlayLine::new("PRESS ENTER TO START AGAIN", TextSize::Medium),
            ]),
        }
    }

    pub fn lines(&self) -> &[OverlayLine] {
        match self {
            Overlay::None => &[],
            Overlay::Menu(lines) | Overlay::GameOver(lines) => lines,
        }
    }
}

/// HUD score text
pub fn score_line(score: u32) -> String {
    format!("SCORE: {}", score)
}
