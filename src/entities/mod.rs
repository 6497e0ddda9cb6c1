//! Entities: hostile and player-placed units plus the capability contract
//! they share with the board.
//!
//! - `capability`: receive traits with default no-ops, `Strike`, `Advance`
//! - `hostile`: Vampire, Explosive Vampire, Dracula
//! - `defender`: Slayer, Blood Bank
//! - `entity`: the `Entity` sum type the board stores

pub mod capability;
pub mod hostile;
pub mod defender;
pub mod entity;

pub use capability::{Advance, FlashTarget, GarlicTarget, SlayerTarget, Strike, StrikeKind, VampireTarget, Vitals};
pub use hostile::{Hostile, HostileKind};
pub use defender::{BloodBank, Slayer};
pub use entity::Entity;
