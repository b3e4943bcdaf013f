/// Terminal-backed implementations of the game's collaborators.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::core::game::{InputSource, Keypress, Renderer, Sleeper};
use crate::core::renderer::BoardView;
use crate::error::SimonError;
use crate::games::simon::Color;
use crate::games::GameInfo;

/// Owns the ratatui terminal and draws full board frames into it.
pub struct TerminalContext {
    terminal: DefaultTerminal,
    info: &'static GameInfo,
}

impl TerminalContext {
    /// Enter raw mode and the alternate screen. On failure the terminal is
    /// put back before the error is returned.
    pub fn init(info: &'static GameInfo) -> Result<Self> {
        let terminal = start_or_restore(ratatui::try_init, ratatui::restore)?;
        Ok(Self { terminal, info })
    }

    /// Leave raw mode and the alternate screen. Safe to call on any exit path.
    pub fn restore() {
        ratatui::restore();
    }
}

impl Renderer for TerminalContext {
    fn render_board(&mut self, highlight: Option<Color>, score: u32, message: &str) -> Result<()> {
        let view = BoardView { info: self.info, highlight, score, message };
        self.terminal.draw(|f| view.render(f))?;
        Ok(())
    }
}

/// Setup may fail after raw mode is already on, so undo it on any error.
fn start_or_restore<T>(
    start: impl FnOnce() -> std::io::Result<T>,
    restore: impl FnOnce(),
) -> Result<T, SimonError> {
    start().map_err(|e| {
        restore();
        SimonError::Terminal(e)
    })
}

/// Keyboard events from crossterm.
#[derive(Debug, Default)]
pub struct Keyboard;

impl InputSource for Keyboard {
    fn flush_pending(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }

    fn read_key(&mut self) -> Result<Keypress> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
        }
    }
}

fn map_key(key: KeyEvent) -> Keypress {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Keypress::Interrupt,
        KeyCode::Char(c) => Keypress::Char(c),
        _ => Keypress::Other,
    }
}

/// Plain thread sleep.
#[derive(Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
