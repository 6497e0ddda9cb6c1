//! Capability contract between entities and the board.
//!
//! Each interaction an entity can receive is its own trait with a default
//! implementation that does nothing and reports `false`. Variants implement
//! the traits they react to and override only the methods that matter; the
//! board calls the capability on whatever occupies a cell and trusts the
//! default for everything else.
//!
//! Offensive actions flow the other way: an entity produces a [`Strike`]
//! against a read-only board, and the board resolves it by calling the
//! matching receive method on the target.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Receives damage from a Slayer (or an explosion).
pub trait SlayerTarget {
    /// Apply `damage`. Returns true if this attack killed the receiver.
    fn receive_slayer_attack(&mut self, _damage: i32) -> bool {
        false
    }
}

/// Receives damage from a hostile.
pub trait VampireTarget {
    /// Apply `damage`. Returns true if this attack killed the receiver.
    fn receive_vampire_attack(&mut self, _damage: i32) -> bool {
        false
    }
}

/// Reacts to a Garlic Push.
pub trait GarlicTarget {
    /// Step one column back towards the spawn lane. Returns true if the
    /// receiver moved.
    fn receive_garlic_push(&mut self) -> bool {
        false
    }
}

/// Reacts to a Light Flash.
pub trait FlashTarget {
    /// Returns true if the flash killed the receiver.
    fn receive_light_flash(&mut self) -> bool {
        false
    }
}

/// Who dealt a strike, which selects the receive method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrikeKind {
    /// Dealt by a Slayer or an explosion.
    Slayer(i32),
    /// Dealt by a hostile.
    Vampire(i32),
}

/// A pending attack on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    /// Cell being attacked.
    pub target: Position,
    /// Damage and its source.
    pub kind: StrikeKind,
}

impl Strike {
    /// A Slayer-type strike.
    #[must_use]
    pub const fn slayer(target: Position, damage: i32) -> Self {
        Self {
            target,
            kind: StrikeKind::Slayer(damage),
        }
    }

    /// A hostile strike.
    #[must_use]
    pub const fn vampire(target: Position, damage: i32) -> Self {
        Self {
            target,
            kind: StrikeKind::Vampire(damage),
        }
    }
}

/// What an entity did when it advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Nothing observable.
    Idle,
    /// Moved to a new on-board cell.
    Moved {
        /// Previous cell.
        from: Position,
    },
    /// Stepped past the left edge.
    Escaped {
        /// Previous cell.
        from: Position,
    },
    /// Produced coins for the player.
    Income(u32),
}

/// Position and health shared by every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    /// Current cell.
    pub pos: Position,
    /// Remaining health. Dead at zero or below.
    pub health: i32,
}

impl Vitals {
    /// Create vitals at `pos` with `health`.
    #[must_use]
    pub const fn new(pos: Position, health: i32) -> Self {
        Self { pos, health }
    }

    /// Check if still alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage. Returns true if this damage took the health from
    /// positive to zero or below.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(damage);
        was_alive && !self.is_alive()
    }

    /// Drop health to zero. Returns true if the entity was alive.
    pub fn kill(&mut self) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.min(0);
        was_alive
    }
}
