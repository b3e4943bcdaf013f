pub mod simon;

/// Metadata about a game
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
}

impl GameInfo {
    /// Header line drawn above the board, e.g. "nSimon v1.0.0".
    pub fn title(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }
}

pub static NSIMON: GameInfo = GameInfo {
    id: "nsimon",
    name: "nSimon",
    version: env!("CARGO_PKG_VERSION"),
    description: "Repeat the growing chain of colored flashes",
    author: "nSimon Team",
};
