//! Board-scoped bookkeeping.

use serde::{Deserialize, Serialize};

/// Hostile population counters.
///
/// These live on the board, not in process-wide state, so independent
/// simulations never share them and a reset starts from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostileCounts {
    /// Hostiles currently on the board.
    pub alive: u32,
    /// Hostiles killed so far. Never decreases.
    pub dead: u32,
    /// Whether a Dracula is on the board.
    pub boss_alive: bool,
}

impl HostileCounts {
    /// Hostiles spawned so far that have not escaped.
    #[must_use]
    pub const fn accounted(&self) -> u32 {
        self.alive + self.dead
    }
}

/// What happened during one board update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Coins produced by Blood Banks.
    pub coins_earned: u32,
    /// Hostiles removed because they died.
    pub hostiles_killed: u32,
    /// Hostiles that stepped past the left edge.
    pub hostiles_escaped: u32,
    /// Slayers and Blood Banks lost.
    pub defenders_lost: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounted() {
        let counts = HostileCounts {
            alive: 2,
            dead: 3,
            boss_alive: false,
        };
        assert_eq!(counts.accounted(), 5);
        assert_eq!(HostileCounts::default().accounted(), 0);
    }
}
