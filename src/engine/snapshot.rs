//! Binary checkpoints of a running game.
//!
//! A `GameSnapshot` captures everything needed to continue a game exactly:
//! the RNG is stored as seed plus ChaCha word position, so a restored game
//! draws the same numbers the uninterrupted game would have.
//!
//! ```
//! use vampire_siege::core::Level;
//! use vampire_siege::engine::{Game, GameSnapshot};
//!
//! let mut game = Game::new(9, Level::hard()).unwrap();
//! game.none().unwrap();
//!
//! let bytes = game.snapshot().to_bytes().unwrap();
//! let mut restored = Game::restore(GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();
//!
//! game.none().unwrap();
//! restored.none().unwrap();
//! assert_eq!(game.serialize(), restored.serialize());
//! ```

use serde::{Deserialize, Serialize};

use super::game::Game;
use super::status::GameStatus;
use crate::board::Board;
use crate::core::{CommandRecord, GameRng, GameRngState, Level, Player};
use crate::error::{SiegeError, SiegeResult};

/// Serializable state of a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Level configuration.
    pub level: Level,
    /// Wallet.
    pub player: Player,
    /// Board contents and counters.
    pub board: Board,
    /// RNG position.
    pub rng: GameRngState,
    /// Completed cycles.
    pub cycles: u32,
    /// Status at capture time.
    pub status: GameStatus,
    /// Command history.
    pub history: Vec<CommandRecord>,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> SiegeResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> SiegeResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Game {
    /// Capture the current state. The board's maps are shared structurally,
    /// so this copies no entities.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            level: self.level.clone(),
            player: self.player,
            board: self.board.clone(),
            rng: self.rng.state(),
            cycles: self.cycles,
            status: self.status,
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// Decoded bytes are untrusted: the level is validated again and the
    /// board must have the level's dimensions.
    pub fn restore(snapshot: GameSnapshot) -> SiegeResult<Self> {
        snapshot.level.validate()?;
        let (rows, cols) = (snapshot.board.rows(), snapshot.board.cols());
        if (rows, cols) != (snapshot.level.rows, snapshot.level.cols) {
            return Err(SiegeError::InvalidLevel(format!(
                "board is {}x{} but level {} is {}x{}",
                rows, cols, snapshot.level.name, snapshot.level.rows, snapshot.level.cols
            )));
        }

        Ok(Self {
            level: snapshot.level,
            player: snapshot.player,
            board: snapshot.board,
            rng: GameRng::from_state(&snapshot.rng),
            cycles: snapshot.cycles,
            status: snapshot.status,
            history: snapshot.history,
        })
    }
}
