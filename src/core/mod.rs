//! Core value types: positions, RNG, player wallet, level configuration,
//! commands.
//!
//! Nothing in here knows about entities or the board beyond the hostile
//! kind a debug command names.

pub mod position;
pub mod player;
pub mod rng;
pub mod config;
pub mod command;

pub use position::{EntityId, Position};
pub use player::{Player, INITIAL_COINS};
pub use rng::{GameRng, GameRngState};
pub use config::Level;
pub use command::{Command, CommandRecord};
