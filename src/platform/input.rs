//! Input sources
//!
//! `KeyboardInput` polls crossterm key events without blocking, so the frame
//! loop drains whatever was pressed since the previous frame.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputSource;
use crate::sim::Action;

/// What a single key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Action(Action),
    Quit,
    Ignored,
}

/// Map a terminal key event. Arrows and Enter are the primary controls;
/// `wasd`/`hjkl` letters go through [`Action::from_key`].
pub fn map_key(key: KeyEvent) -> KeyInput {
    // Some platforms also report releases and repeats
    if key.kind != KeyEventKind::Press {
        return KeyInput::Ignored;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => KeyInput::Quit,
        // Raw mode swallows SIGINT
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyInput::Quit,
        KeyCode::Left => KeyInput::Action(Action::MoveLeft),
        KeyCode::Right => KeyInput::Action(Action::MoveRight),
        KeyCode::Up => KeyInput::Action(Action::MoveUp),
        KeyCode::Down => KeyInput::Action(Action::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => KeyInput::Action(Action::Confirm),
        KeyCode::Char(c) => match Action::from_key(c.encode_utf8(&mut [0; 4])) {
            Some(action) => KeyInput::Action(action),
            None => KeyInput::Ignored,
        },
        _ => KeyInput::Ignored,
    }
}

/// Keyboard input from the terminal (expects raw mode)
#[derive(Debug, Default)]
pub struct KeyboardInput {
    closed: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for KeyboardInput {
    fn drain(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while !self.closed {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("Input poll failed: {}", e);
                    self.closed = true;
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => match map_key(key) {
                    KeyInput::Action(action) => actions.push(action),
                    KeyInput::Quit => {
                        log::info!("Quit requested");
                        self.closed = true;
                    }
                    KeyInput::Ignored => log::debug!("Ignoring key {:?}", key.code),
                },
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Input read failed: {}", e);
                    self.closed = true;
                }
            }
        }
        actions
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// In-memory action queue, for replays and scripted play
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    queue: VecDeque<Action>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<Action> for QueuedInput {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl InputSource for QueuedInput {
    fn drain(&mut self) -> Vec<Action> {
        self.queue.drain(..).collect()
    }
}
