//! # vampire-siege
//!
//! A deterministic, turn-based grid defense simulation engine.
//!
//! The player places Slayers and Blood Banks and casts Garlic Push and
//! Light Flash to stop randomly spawned Vampires, Explosive Vampires and
//! Dracula from crossing the board right to left.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One seeded RNG drives every random draw. The same
//!    seed and command sequence reproduce the same game.
//!
//! 2. **Validate, then mutate**: A command either fails with a typed
//!    [`SiegeError`] and changes nothing, or applies its effect and runs
//!    exactly one cycle.
//!
//! 3. **No shared state**: Hostile counters live on the board, so any
//!    number of games can run side by side.
//!
//! ## Modules
//!
//! - `core`: positions, RNG, player wallet, levels, commands
//! - `entities`: entity variants and the capability contract
//! - `board`: entity storage, occupancy, per-cycle update, area effects
//! - `engine`: the `Game` loop, commands, rendering, save and checkpoints

pub mod core;
pub mod entities;
pub mod board;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandRecord,
    EntityId, Position,
    GameRng, GameRngState,
    Level, Player,
};

pub use crate::entities::{
    Entity, HostileKind,
    SlayerTarget, VampireTarget, GarlicTarget, FlashTarget,
    Strike, StrikeKind,
};

pub use crate::board::{Board, CycleReport, HostileCounts};

pub use crate::engine::{Game, GameSnapshot, GameStatus};

pub use crate::error::{SiegeError, SiegeResult};
