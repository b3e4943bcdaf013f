use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of quadrants on the board.
pub const NUM_COLORS: u8 = 4;

/// One of the four board quadrants, numbered the way the keys are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green = 1,
    Red = 2,
    Yellow = 3,
    Blue = 4,
}

impl Color {
    pub const ALL: [Color; NUM_COLORS as usize] =
        [Color::Green, Color::Red, Color::Yellow, Color::Blue];

    /// Palette lookup by key number. `0` and anything past `4` are not colors.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(Color::Green),
            2 => Some(Color::Red),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The digit key that selects this quadrant.
    pub fn key(self) -> char {
        char::from(b'0' + self.index())
    }
}

/// Anything that can pick the next link of the chain.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Uniform draw over the palette.
pub struct RandomColorGenerator {
    rng: StdRng,
}

impl RandomColorGenerator {
    /// Seeded once from the wall clock.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        tracing::debug!(seed, "seeding color generator");
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl ColorSource for RandomColorGenerator {
    fn next_color(&mut self) -> Color {
        Color::ALL[self.rng.random_range(0..Color::ALL.len())]
    }
}
