//! Headless stand-ins for the terminal, used by unit tests.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::core::game::{InputSource, Keypress, Renderer, Sleeper};
use crate::games::simon::{Color, ColorSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub highlight: Option<Color>,
    pub score: u32,
    pub message: String,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn highlights(&self) -> Vec<Option<Color>> {
        self.frames.iter().map(|f| f.highlight).collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.message.as_str()).collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, highlight: Option<Color>, score: u32, message: &str) -> Result<()> {
        self.frames.push(Frame { highlight, score, message: message.to_string() });
        Ok(())
    }
}

/// Hands out keys in order. Flushing is only counted, since scripted keys
/// stand for presses made after the flush.
#[derive(Default)]
pub struct ScriptedInput {
    pub keys: VecDeque<Keypress>,
    pub flushes: usize,
    pub reads: usize,
}

impl ScriptedInput {
    pub fn chars(keys: &str) -> Self {
        Self {
            keys: keys.chars().map(Keypress::Char).collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, key: Keypress) {
        self.keys.push_back(key);
    }
}

impl InputSource for ScriptedInput {
    fn flush_pending(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Keypress> {
        self.reads += 1;
        self.keys.pop_front().ok_or_else(|| anyhow!("input script exhausted"))
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub pauses: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Deals colors from a fixed script, cycling when it runs out.
pub struct ScriptedColors {
    colors: Vec<Color>,
    next: usize,
}

impl ScriptedColors {
    pub fn new(colors: &[Color]) -> Self {
        assert!(!colors.is_empty());
        Self { colors: colors.to_vec(), next: 0 }
    }
}

impl ColorSource for ScriptedColors {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}
