use anyhow::Result;
use tracing::{debug, info};

use crate::config::Timings;
use crate::core::game::{InputSource, Keypress, Renderer, Sleeper};
use crate::games::simon::chain::MemoryChain;
use crate::games::simon::color::ColorSource;
use crate::games::simon::playback::SequencePlayer;
use crate::games::simon::validator::{InputValidator, Outcome};

pub const MSG_ATTRACT: &str = "Press any key to start.";
pub const MSG_PREPARE: &str = "Prepare yourself!";
pub const MSG_RECALL: &str = "Do you remember?";
pub const MSG_CORRECT: &str = "Correct! Get ready...";
pub const MSG_GAME_OVER: &str = "Game over. Press any key to play again. Press <Q> to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for any key to begin.
    Attract,
    PreRound,
    Playback,
    AwaitingInput,
    RoundSuccess,
    /// Wrong key; waiting for retry or quit.
    RoundFailure,
    Terminated,
}

/// The whole game: owns chain and score and walks the phases.
pub struct SimonGame<R, I, S, G> {
    renderer: R,
    input: I,
    sleeper: S,
    colors: G,
    chain: MemoryChain,
    score: u32,
    phase: GamePhase,
    timings: Timings,
    player: SequencePlayer,
    validator: InputValidator,
}

impl<R, I, S, G> SimonGame<R, I, S, G>
where
    R: Renderer,
    I: InputSource,
    S: Sleeper,
    G: ColorSource,
{
    pub fn new(renderer: R, input: I, sleeper: S, colors: G, timings: Timings) -> Self {
        Self::with_chain(renderer, input, sleeper, colors, timings, MemoryChain::new())
    }

    pub fn with_chain(
        renderer: R,
        input: I,
        sleeper: S,
        colors: G,
        timings: Timings,
        chain: MemoryChain,
    ) -> Self {
        Self {
            renderer,
            input,
            sleeper,
            colors,
            chain,
            score: 0,
            phase: GamePhase::Attract,
            timings,
            player: SequencePlayer::new(timings),
            validator: InputValidator,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn chain(&self) -> &MemoryChain {
        &self.chain
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Drive the state machine until the player quits.
    pub fn run(&mut self) -> Result<u32> {
        while self.phase != GamePhase::Terminated {
            self.step()?;
        }
        Ok(self.score)
    }

    /// Run the current phase's entry action and move to the next phase.
    pub fn step(&mut self) -> Result<GamePhase> {
        let next = match self.phase {
            GamePhase::Attract => {
                self.renderer.render_board(None, self.score, MSG_ATTRACT)?;
                match self.input.read_key()? {
                    Keypress::Interrupt => GamePhase::Terminated,
                    _ => GamePhase::PreRound,
                }
            }
            GamePhase::PreRound => {
                self.prepare()?;
                GamePhase::Playback
            }
            GamePhase::Playback => {
                self.chain.extend(&mut self.colors)?;
                self.player.play(
                    &self.chain,
                    self.chain.len(),
                    self.score,
                    &mut self.renderer,
                    &mut self.sleeper,
                )?;
                GamePhase::AwaitingInput
            }
            GamePhase::AwaitingInput => self.await_input()?,
            GamePhase::RoundSuccess => {
                self.renderer.render_board(None, self.score, MSG_CORRECT)?;
                self.score += 1;
                info!(score = self.score, "round cleared");
                self.sleeper.pause(self.timings.round_pause);
                GamePhase::Playback
            }
            GamePhase::RoundFailure => {
                self.renderer.render_board(None, self.score, MSG_GAME_OVER)?;
                self.input.flush_pending()?;
                match self.input.read_key()? {
                    Keypress::Interrupt => GamePhase::Terminated,
                    key if key.is_quit() => GamePhase::Terminated,
                    _ => {
                        self.reset()?;
                        GamePhase::Playback
                    }
                }
            }
            GamePhase::Terminated => GamePhase::Terminated,
        };

        if next != self.phase {
            debug!(from = ?self.phase, to = ?next, score = self.score, "phase transition");
        }
        if next == GamePhase::Terminated && self.phase != GamePhase::Terminated {
            info!(score = self.score, "game terminated");
        }
        self.phase = next;
        Ok(next)
    }

    fn await_input(&mut self) -> Result<GamePhase> {
        let Self { renderer, input, sleeper, chain, score, timings, validator, .. } = self;
        let score = *score;
        let feedback = timings.feedback;
        let length = chain.len();

        renderer.render_board(None, score, MSG_RECALL)?;
        let outcome = validator.collect_and_validate(chain, length, input, |color| {
            renderer.render_board(Some(color), score, "")?;
            sleeper.pause(feedback);
            renderer.render_board(None, score, "")
        })?;

        Ok(match outcome {
            Outcome::Correct => GamePhase::RoundSuccess,
            Outcome::Mismatch { at, expected, got } => {
                info!(score, position = at, ?expected, ?got, "wrong key");
                GamePhase::RoundFailure
            }
            Outcome::Interrupted => GamePhase::Terminated,
        })
    }

    fn prepare(&mut self) -> Result<()> {
        self.renderer.render_board(None, self.score, MSG_PREPARE)?;
        self.sleeper.pause(self.timings.round_pause);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        info!(final_score = self.score, "restarting");
        self.chain.reset();
        self.score = 0;
        self.prepare()
    }
}
