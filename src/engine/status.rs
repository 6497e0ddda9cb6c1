//! Simulation status.

use serde::{Deserialize, Serialize};

/// Where a simulation stands.
///
/// `Running` is the only non-terminal state; once left, a game never
/// returns to it except through a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still playing.
    #[default]
    Running,
    /// A hostile crossed the board.
    VampiresWin,
    /// Every hostile of the level was killed.
    PlayerWins,
    /// The player quit.
    ExitRequested,
}

impl GameStatus {
    /// Check if this is a terminal state.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameStatus::Running)
    }

    /// Message shown when the game ends.
    #[must_use]
    pub const fn winner_message(self) -> &'static str {
        match self {
            GameStatus::VampiresWin => "Vampires win!",
            GameStatus::PlayerWins => "Player wins",
            GameStatus::Running | GameStatus::ExitRequested => "Nobody wins...",
        }
    }
}
