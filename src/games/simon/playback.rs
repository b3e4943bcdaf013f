use anyhow::Result;
use tracing::trace;

use crate::config::Timings;
use crate::core::game::{Renderer, Sleeper};
use crate::games::simon::chain::MemoryChain;

/// Replays the chain on the board, one flash per link.
#[derive(Debug, Clone, Copy)]
pub struct SequencePlayer {
    timings: Timings,
}

impl SequencePlayer {
    pub fn new(timings: Timings) -> Self {
        Self { timings }
    }

    /// Show the first `length` links. Every flash is followed by a dark
    /// frame, so two equal neighbours read as two flashes.
    pub fn play<R, S>(
        &self,
        chain: &MemoryChain,
        length: usize,
        score: u32,
        renderer: &mut R,
        sleeper: &mut S,
    ) -> Result<()>
    where
        R: Renderer + ?Sized,
        S: Sleeper + ?Sized,
    {
        for i in 0..length {
            let link = chain.at(i);
            trace!(position = i, color = ?link, "playing link");

            renderer.render_board(link, score, "")?;
            sleeper.pause(self.timings.highlight);

            renderer.render_board(None, score, "")?;
            sleeper.pause(self.timings.gap);
        }
        Ok(())
    }
}
