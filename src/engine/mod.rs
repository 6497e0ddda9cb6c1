//! Simulation engine: the cycle loop, player commands, status, rendering
//! and checkpoints.

pub mod game;
pub mod status;
pub mod snapshot;
mod printer;

pub use game::{
    Game, COIN_BONUS_THRESHOLD, COST_GARLIC_PUSH, COST_LIGHT_FLASH, NUM_COINS_PER_CYCLE, SAVE_HEADER,
};
pub use snapshot::GameSnapshot;
pub use status::GameStatus;
