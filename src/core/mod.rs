pub mod game;      // Collaborator traits
pub mod renderer;  // Board drawing
pub mod terminal;  // Terminal context wrapper

#[cfg(test)]
pub(crate) mod fakes;
