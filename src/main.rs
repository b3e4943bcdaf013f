use anyhow::Result;
use nsimon::config::Config;
use nsimon::core::terminal::{Keyboard, TerminalContext, ThreadSleeper};
use nsimon::games::{simon::RandomColorGenerator, NSIMON};
use nsimon::{logging, SimonGame};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init_tracing(&config);
    tracing::info!(game = NSIMON.id, version = NSIMON.version, "starting");

    let terminal = TerminalContext::init(&NSIMON)?;
    let colors = RandomColorGenerator::from_time();
    let mut game = SimonGame::new(terminal, Keyboard, ThreadSleeper, colors, config.timings);

    // Run the game, then hand the terminal back whatever happened
    let result = game.run();
    TerminalContext::restore();

    match result {
        Ok(score) => {
            tracing::info!(score, "exiting");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            Err(e)
        }
    }
}
