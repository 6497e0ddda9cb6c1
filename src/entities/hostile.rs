//! Hostile units: Vampire, Explosive Vampire and Dracula.
//!
//! All three walk left along their row one column every
//! [`MOVE_INTERVAL`] cycles and bite whatever blocks them. They differ in
//! bite damage (Dracula kills outright), Light Flash immunity (Dracula) and
//! death behavior (the explosive one damages everything around it).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::capability::{Advance, FlashTarget, GarlicTarget, SlayerTarget, Strike, VampireTarget, Vitals};
use crate::board::Board;
use crate::core::Position;

/// Starting health of every hostile.
pub const HOSTILE_HEALTH: i32 = 5;

/// Damage a Vampire or Explosive Vampire deals per bite.
pub const VAMPIRE_DAMAGE: i32 = 1;

/// Damage an explosion deals to each surrounding cell.
pub const EXPLOSION_DAMAGE: i32 = 1;

/// Cycles between two steps.
pub const MOVE_INTERVAL: u8 = 2;

/// Hostile variant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    /// Basic vampire.
    Vampire,
    /// Boss. At most one alive; immune to Light Flash; bites kill.
    Dracula,
    /// Explodes when a Slayer kills it.
    Explosive,
}

impl HostileKind {
    /// All kinds, in spawn-attempt order.
    pub const ALL: [HostileKind; 3] = [HostileKind::Vampire, HostileKind::Dracula, HostileKind::Explosive];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            HostileKind::Vampire => "V",
            HostileKind::Dracula => "D",
            HostileKind::Explosive => "EV",
        }
    }

    /// Check if this is the boss kind.
    #[must_use]
    pub const fn is_boss(self) -> bool {
        matches!(self, HostileKind::Dracula)
    }
}

impl std::fmt::Display for HostileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HostileKind::Vampire => "Vampire",
            HostileKind::Dracula => "Dracula",
            HostileKind::Explosive => "Explosive Vampire",
        };
        f.write_str(name)
    }
}

/// A hostile unit on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hostile {
    kind: HostileKind,
    vitals: Vitals,
    steps_to_move: u8,
}

impl Hostile {
    /// Spawn a fresh hostile at `pos`.
    #[must_use]
    pub const fn new(kind: HostileKind, pos: Position) -> Self {
        Self {
            kind,
            vitals: Vitals::new(pos, HOSTILE_HEALTH),
            steps_to_move: MOVE_INTERVAL - 1,
        }
    }

    /// Variant tag.
    #[must_use]
    pub const fn kind(&self) -> HostileKind {
        self.kind
    }

    /// Position and health.
    #[must_use]
    pub const fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Cycles left before the next step.
    #[must_use]
    pub const fn steps_to_move(&self) -> u8 {
        self.steps_to_move
    }

    /// Walk one column left if it is time and the path is clear.
    ///
    /// A blocked hostile keeps its counter at zero so it steps as soon as
    /// the cell frees up.
    pub fn advance(&mut self, path_blocked: bool) -> Advance {
        if self.steps_to_move > 0 {
            self.steps_to_move -= 1;
            return Advance::Idle;
        }
        if path_blocked {
            return Advance::Idle;
        }

        let from = self.vitals.pos;
        self.vitals.pos = from.left();
        self.steps_to_move = MOVE_INTERVAL - 1;

        if self.vitals.pos.col < 0 {
            Advance::Escaped { from }
        } else {
            Advance::Moved { from }
        }
    }

    /// Bite whatever stands in the cell ahead.
    pub fn strike(&self, board: &Board) -> Option<Strike> {
        let ahead = self.vitals.pos.left();
        let target = board.attackable_in_position(ahead)?;
        let damage = match self.kind {
            HostileKind::Dracula => target.health().max(1),
            HostileKind::Vampire | HostileKind::Explosive => VAMPIRE_DAMAGE,
        };
        Some(Strike::vampire(ahead, damage))
    }

    /// Strikes released when a Slayer kills this hostile.
    #[must_use]
    pub fn death_strikes(&self) -> SmallVec<[Strike; 8]> {
        match self.kind {
            HostileKind::Explosive => self
                .vitals
                .pos
                .neighbours()
                .into_iter()
                .map(|pos| Strike::slayer(pos, EXPLOSION_DAMAGE))
                .collect(),
            HostileKind::Vampire | HostileKind::Dracula => SmallVec::new(),
        }
    }

    pub(crate) fn kill(&mut self) -> bool {
        self.vitals.kill()
    }
}

impl SlayerTarget for Hostile {
    fn receive_slayer_attack(&mut self, damage: i32) -> bool {
        self.vitals.take_damage(damage)
    }
}

// Hostiles never bite each other.
impl VampireTarget for Hostile {}

impl GarlicTarget for Hostile {
    fn receive_garlic_push(&mut self) -> bool {
        self.vitals.pos = self.vitals.pos.right();
        self.steps_to_move = MOVE_INTERVAL - 1;
        true
    }
}

impl FlashTarget for Hostile {
    fn receive_light_flash(&mut self) -> bool {
        match self.kind {
            HostileKind::Dracula => false,
            HostileKind::Vampire | HostileKind::Explosive => self.vitals.kill(),
        }
    }
}
