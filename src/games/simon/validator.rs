use anyhow::Result;
use tracing::trace;

use crate::core::game::{InputSource, Keypress};
use crate::games::simon::chain::MemoryChain;
use crate::games::simon::color::Color;

/// Result of collecting one round of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Mismatch {
        at: usize,
        /// `None` only if the chain is shorter than the round.
        expected: Option<Color>,
        got: Keypress,
    },
    /// Ctrl+C while waiting for a key.
    Interrupted,
}

/// Reads keys one at a time and checks each against the chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator;

impl InputValidator {
    /// Check the first `length` links. Stops at the first wrong key so the
    /// rest of the round is never read. `on_match` runs after each correct
    /// key, before the next read.
    pub fn collect_and_validate<I, F>(
        &self,
        chain: &MemoryChain,
        length: usize,
        input: &mut I,
        mut on_match: F,
    ) -> Result<Outcome>
    where
        I: InputSource + ?Sized,
        F: FnMut(Color) -> Result<()>,
    {
        for i in 0..length {
            // Keys mashed during playback must not count.
            input.flush_pending()?;
            let key = input.read_key()?;
            if key == Keypress::Interrupt {
                return Ok(Outcome::Interrupted);
            }

            let expected = chain.at(i);
            match (key.color(), expected) {
                (Some(got), Some(want)) if got == want => {
                    trace!(position = i, color = ?got, "link matched");
                    on_match(got)?;
                }
                _ => return Ok(Outcome::Mismatch { at: i, expected, got: key }),
            }
        }
        Ok(Outcome::Correct)
    }
}
