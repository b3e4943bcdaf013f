/// Collaborator interfaces the game core drives.
///
/// The state machine never touches the terminal directly: it draws through a
/// [`Renderer`], waits on an [`InputSource`] and paces animation with a
/// [`Sleeper`]. [`crate::core::terminal::TerminalContext`] implements all
/// three for a real terminal; tests substitute recording fakes.
use std::time::Duration;

use anyhow::Result;

use crate::games::simon::Color;

/// Quit character at the game-over prompt.
pub const QUIT_KEY: char = 'q';

/// A single raw input event, reduced to what the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keypress {
    Char(char),
    /// Ctrl+C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    Other,
}

impl Keypress {
    /// The quadrant color this key selects, if it is one of `1`..`4`.
    pub fn color(self) -> Option<Color> {
        match self {
            Keypress::Char(c) => c.to_digit(10).and_then(Color::from_index),
            _ => None,
        }
    }

    pub fn is_quit(self) -> bool {
        self == Keypress::Char(QUIT_KEY)
    }
}

/// Full-frame board drawing. Calling it twice with the same arguments must
/// leave the screen in the same state.
pub trait Renderer {
    fn render_board(&mut self, highlight: Option<Color>, score: u32, message: &str) -> Result<()>;
}

/// Blocking keyboard input.
pub trait InputSource {
    /// Drop every event buffered so far.
    fn flush_pending(&mut self) -> Result<()>;

    /// Block until exactly one key is pressed.
    fn read_key(&mut self) -> Result<Keypress>;
}

/// Blocking delay used for animation pacing.
pub trait Sleeper {
    fn pause(&mut self, duration: Duration);
}
