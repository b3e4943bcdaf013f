/// nSimon: repeat the growing chain of flashes.
pub mod chain;
pub mod color;
pub mod game;
pub mod playback;
pub mod validator;

pub use chain::{MemoryChain, MAX_CHAIN_LEN};
pub use color::{Color, ColorSource, RandomColorGenerator, NUM_COLORS};
pub use game::{GamePhase, SimonGame};
pub use playback::SequencePlayer;
pub use validator::{InputValidator, Outcome};
