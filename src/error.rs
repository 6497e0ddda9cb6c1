//! Error type for the simulation engine.
//!
//! Every command validates before it mutates, so any `SiegeError` returned
//! by a command means the game state is exactly as it was before the call.

/// Core error type for the simulation engine.
#[derive(thiserror::Error, Debug)]
pub enum SiegeError {
    /// Target cell is out of bounds, occupied, or in a forbidden column.
    #[error("Invalid position ({row}, {col})")]
    InvalidPosition {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// Player cannot afford the command.
    #[error("{command} cost is {cost}: Not enough coins")]
    InsufficientFunds {
        /// Name of the command, for messaging.
        command: &'static str,
        /// Coins the command requires.
        cost: u32,
    },

    /// The level's hostile limit has already been met.
    #[error("No more remaining vampires left")]
    PopulationCapReached,

    /// A Dracula is already on the board.
    #[error("Dracula is already on board")]
    BossAlreadyPresent,

    /// The simulation reached a terminal state.
    #[error("Game is over")]
    GameOver,

    /// Level parameters are out of range.
    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    /// No preset level with this name.
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Checkpoint encoding or decoding failed
    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] bincode::Error),
}

impl SiegeError {
    /// Whether this is a command-validation failure (as opposed to I/O or
    /// configuration).
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SiegeError::InvalidPosition { .. }
                | SiegeError::InsufficientFunds { .. }
                | SiegeError::PopulationCapReached
                | SiegeError::BossAlreadyPresent
                | SiegeError::GameOver
        )
    }
}

/// Result type used throughout the crate.
pub type SiegeResult<T> = Result<T, SiegeError>;
