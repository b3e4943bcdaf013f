pub mod config;
pub mod core;
pub mod error;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::core::game::{InputSource, Keypress, Renderer, Sleeper};
pub use crate::error::SimonError;
pub use crate::games::simon::{Color, GamePhase, MemoryChain, SimonGame};
