//! Player-placed units: Slayer and Blood Bank.

use serde::{Deserialize, Serialize};

use super::capability::{Advance, FlashTarget, GarlicTarget, SlayerTarget, Strike, VampireTarget, Vitals};
use crate::board::Board;
use crate::core::Position;

/// Starting health of a Slayer.
pub const SLAYER_HEALTH: i32 = 3;

/// Damage a Slayer deals per shot.
pub const SLAYER_DAMAGE: i32 = 1;

/// Coins a Slayer costs.
pub const SLAYER_COST: u32 = 50;

/// Starting health of a Blood Bank.
pub const BANK_HEALTH: i32 = 1;

/// Percentage of its cost a Blood Bank returns every cycle.
pub const BANK_YIELD_PERCENT: u32 = 10;

/// Shoots the first hostile to its right in its row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slayer {
    vitals: Vitals,
}

impl Slayer {
    /// Place a Slayer at `pos`.
    #[must_use]
    pub const fn new(pos: Position) -> Self {
        Self {
            vitals: Vitals::new(pos, SLAYER_HEALTH),
        }
    }

    /// Position and health.
    #[must_use]
    pub const fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Aim at the nearest hostile further along the row.
    pub fn strike(&self, board: &Board) -> Option<Strike> {
        board
            .first_hostile_right_of(self.vitals.pos)
            .map(|target| Strike::slayer(target, SLAYER_DAMAGE))
    }
}

impl VampireTarget for Slayer {
    fn receive_vampire_attack(&mut self, damage: i32) -> bool {
        self.vitals.take_damage(damage)
    }
}

impl SlayerTarget for Slayer {}
impl GarlicTarget for Slayer {}
impl FlashTarget for Slayer {}

/// Returns a share of its cost to the player every cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodBank {
    vitals: Vitals,
    cost: u32,
}

impl BloodBank {
    /// Place a Blood Bank worth `cost` at `pos`.
    #[must_use]
    pub const fn new(pos: Position, cost: u32) -> Self {
        Self {
            vitals: Vitals::new(pos, BANK_HEALTH),
            cost,
        }
    }

    /// Position and health.
    #[must_use]
    pub const fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Coins invested.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Coins produced per cycle.
    #[must_use]
    pub const fn income(&self) -> u32 {
        (self.cost as u64 * BANK_YIELD_PERCENT as u64 / 100) as u32
    }

    /// Pay out this cycle's income.
    #[must_use]
    pub const fn advance(&self) -> Advance {
        Advance::Income(self.income())
    }
}

impl VampireTarget for BloodBank {
    fn receive_vampire_attack(&mut self, damage: i32) -> bool {
        self.vitals.take_damage(damage)
    }
}

impl SlayerTarget for BloodBank {}
impl GarlicTarget for BloodBank {}
impl FlashTarget for BloodBank {}
