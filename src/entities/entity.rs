//! The `Entity` sum type.
//!
//! The board stores `Entity` values and only ever talks to them through
//! this type. Capability traits are implemented here by delegating to the
//! variant, so a call on an entity that does not react falls through to
//! the variant's default no-op.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::capability::{Advance, FlashTarget, GarlicTarget, SlayerTarget, Strike, VampireTarget, Vitals};
use super::defender::{BloodBank, Slayer};
use super::hostile::{Hostile, HostileKind};
use crate::board::Board;
use crate::core::Position;

/// Any unit on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    /// Vampire, Explosive Vampire or Dracula.
    Hostile(Hostile),
    /// Defender.
    Slayer(Slayer),
    /// Resource generator.
    BloodBank(BloodBank),
}

impl Entity {
    /// A fresh hostile of `kind` at `pos`.
    #[must_use]
    pub const fn hostile(kind: HostileKind, pos: Position) -> Self {
        Entity::Hostile(Hostile::new(kind, pos))
    }

    /// A fresh Slayer at `pos`.
    #[must_use]
    pub const fn slayer(pos: Position) -> Self {
        Entity::Slayer(Slayer::new(pos))
    }

    /// A fresh Blood Bank worth `cost` at `pos`.
    #[must_use]
    pub const fn blood_bank(pos: Position, cost: u32) -> Self {
        Entity::BloodBank(BloodBank::new(pos, cost))
    }

    fn vitals(&self) -> &Vitals {
        match self {
            Entity::Hostile(h) => h.vitals(),
            Entity::Slayer(s) => s.vitals(),
            Entity::BloodBank(b) => b.vitals(),
        }
    }

    /// Current cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.vitals().pos
    }

    /// Remaining health.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.vitals().health
    }

    /// Check if still alive (health above zero).
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }

    /// Hostile kind, if this is a hostile.
    #[must_use]
    pub fn hostile_kind(&self) -> Option<HostileKind> {
        match self {
            Entity::Hostile(h) => Some(h.kind()),
            Entity::Slayer(_) | Entity::BloodBank(_) => None,
        }
    }

    /// Check if this is a hostile.
    #[must_use]
    pub fn is_hostile(&self) -> bool {
        self.hostile_kind().is_some()
    }

    /// Check if this is the boss.
    #[must_use]
    pub fn is_boss(&self) -> bool {
        self.hostile_kind().is_some_and(HostileKind::is_boss)
    }

    /// Display symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Entity::Hostile(h) => h.kind().symbol(),
            Entity::Slayer(_) => "S",
            Entity::BloodBank(_) => "B",
        }
    }

    /// Cell text for the board printer, e.g. `V [5]`.
    #[must_use]
    pub fn cell_text(&self) -> String {
        match self {
            Entity::BloodBank(b) => format!("B [{}]", b.cost()),
            _ => format!("{} [{}]", self.symbol(), self.health()),
        }
    }

    /// Save line: `symbol;row;col;health` plus variant extras.
    #[must_use]
    pub fn serialize(&self) -> String {
        let pos = self.position();
        let base = format!("{};{};{};{}", self.symbol(), pos.row, pos.col, self.health());
        match self {
            Entity::Hostile(h) => format!("{};{}", base, h.steps_to_move()),
            Entity::Slayer(_) => base,
            Entity::BloodBank(b) => format!("{};{}", base, b.cost()),
        }
    }

    /// Per-cycle behavior. `path_blocked` tells a hostile whether the cell
    /// ahead is occupied.
    pub fn advance(&mut self, path_blocked: bool) -> Advance {
        match self {
            Entity::Hostile(h) => h.advance(path_blocked),
            Entity::Slayer(_) => Advance::Idle,
            Entity::BloodBank(b) => b.advance(),
        }
    }

    /// Offensive action for this cycle, if any.
    pub fn strike(&self, board: &Board) -> Option<Strike> {
        match self {
            Entity::Hostile(h) => h.strike(board),
            Entity::Slayer(s) => s.strike(board),
            Entity::BloodBank(_) => None,
        }
    }

    /// Strikes released when a Slayer-type attack kills this entity.
    #[must_use]
    pub fn death_strikes(&self) -> SmallVec<[Strike; 8]> {
        match self {
            Entity::Hostile(h) => h.death_strikes(),
            Entity::Slayer(_) | Entity::BloodBank(_) => SmallVec::new(),
        }
    }

    /// Kill an entity that left the board. Returns true if it was alive.
    pub(crate) fn expire(&mut self) -> bool {
        match self {
            Entity::Hostile(h) => h.kill(),
            Entity::Slayer(_) | Entity::BloodBank(_) => false,
        }
    }
}

impl SlayerTarget for Entity {
    fn receive_slayer_attack(&mut self, damage: i32) -> bool {
        match self {
            Entity::Hostile(h) => h.receive_slayer_attack(damage),
            Entity::Slayer(s) => s.receive_slayer_attack(damage),
            Entity::BloodBank(b) => b.receive_slayer_attack(damage),
        }
    }
}

impl VampireTarget for Entity {
    fn receive_vampire_attack(&mut self, damage: i32) -> bool {
        match self {
            Entity::Hostile(h) => h.receive_vampire_attack(damage),
            Entity::Slayer(s) => s.receive_vampire_attack(damage),
            Entity::BloodBank(b) => b.receive_vampire_attack(damage),
        }
    }
}

impl GarlicTarget for Entity {
    fn receive_garlic_push(&mut self) -> bool {
        match self {
            Entity::Hostile(h) => h.receive_garlic_push(),
            Entity::Slayer(s) => s.receive_garlic_push(),
            Entity::BloodBank(b) => b.receive_garlic_push(),
        }
    }
}

impl FlashTarget for Entity {
    fn receive_light_flash(&mut self) -> bool {
        match self {
            Entity::Hostile(h) => h.receive_light_flash(),
            Entity::Slayer(s) => s.receive_light_flash(),
            Entity::BloodBank(b) => b.receive_light_flash(),
        }
    }
}
