//! Terminal renderer
//!
//! Draws one character per cell: `~` water, `.` stone lanes, `,` grass,
//! `*` gems, `E` bugs and `@` the player, followed by the HUD and overlay.

use std::io::{self, Write};

use crossterm::{cursor, execute, queue, style, terminal};

use super::Renderer;
use crate::sim::{Cell, GameState, RandomProvider, SpriteId};
use crate::ui::{Overlay, score_line};

/// Raw mode plus alternate screen for the lifetime of the value
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        log::debug!("Entered alternate screen");
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap
        ) {
            log::warn!("Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {}", e);
        }
    }
}

/// Terminal renderer writing to any `Write`
pub struct TextRenderer<W: Write> {
    out: W,
    /// Redraw in place from the top-left corner (raw mode line endings)
    in_place: bool,
    /// Last frame written, to skip redrawing identical frames
    last_frame: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            in_place: true,
            last_frame: String::new(),
        }
    }

    /// Renderer that appends frames as plain lines (logs, tests)
    pub fn plain(out: W) -> Self {
        Self {
            in_place: false,
            ..Self::new(out)
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Compose a full frame as text
    pub fn compose<R: RandomProvider>(state: &GameState<R>) -> String {
        let grid = state.grid();
        let mut rows: Vec<Vec<char>> = (0..grid.rows)
            .map(|row| {
                let tile = if grid.is_hazard(Cell::new(0, row)) {
                    '~'
                } else if grid.lane_range().contains(row) {
                    '.'
                } else {
                    ','
                };
                vec![tile; grid.columns as usize]
            })
            .collect();

        // Draw order matches sprites(): later sprites cover earlier ones
        for sprite in state.sprites() {
            if !grid.contains(sprite.cell) {
                continue;
            }
            let glyph = match sprite.id {
                SpriteId::Gem(_) => '*',
                SpriteId::EnemyBug => 'E',
                SpriteId::Character(_) => '@',
            };
            rows[sprite.cell.row as usize][sprite.cell.col as usize] = glyph;
        }

        let mut frame = score_line(state.score());
        frame.push('\n');
        for row in rows {
            frame.extend(row);
            frame.push('\n');
        }
        for line in Overlay::for_state(state).lines() {
            frame.push_str(&line.text);
            frame.push('\n');
        }
        frame
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn render<R: RandomProvider>(&mut self, state: &GameState<R>) -> Result<(), Self::Error> {
        let frame = Self::compose(state);
        if frame == self.last_frame {
            return Ok(());
        }
        if self.in_place {
            queue!(
                self.out,
                cursor::MoveTo(0, 0),
                terminal::Clear(terminal::ClearType::All)
            )?;
            for line in frame.lines() {
                queue!(self.out, style::Print(line), style::Print("\r\n"))?;
            }
        } else {
            self.out.write_all(frame.as_bytes())?;
        }
        self.out.flush()?;
        self.last_frame = frame;
        Ok(())
    }
}
