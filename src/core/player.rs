//! The player's wallet.
//!
//! Coins are a `u32`; a spend that would take the balance below zero is
//! rejected and leaves the balance untouched.

use serde::{Deserialize, Serialize};

/// Coins a fresh player starts with.
pub const INITIAL_COINS: u32 = 50;

/// Player state: a coin balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    coins: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player with the initial balance.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_coins(INITIAL_COINS)
    }

    /// Create a player with a specific balance.
    #[must_use]
    pub const fn with_coins(coins: u32) -> Self {
        Self { coins }
    }

    /// Current balance.
    #[must_use]
    pub const fn coins(&self) -> u32 {
        self.coins
    }

    /// Check if the player can afford `cost`.
    #[must_use]
    pub const fn can_afford(&self, cost: u32) -> bool {
        self.coins >= cost
    }

    /// Add coins to the balance (saturating).
    pub fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Spend coins.
    ///
    /// Returns false (and leaves the balance unchanged) if the balance is
    /// below `cost`.
    pub fn spend(&mut self, cost: u32) -> bool {
        match self.coins.checked_sub(cost) {
            Some(rest) => {
                self.coins = rest;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_balance() {
        assert_eq!(Player::new().coins(), INITIAL_COINS);
        assert_eq!(Player::default(), Player::new());
    }

    #[test]
    fn test_add_and_spend() {
        let mut player = Player::with_coins(0);
        player.add_coins(30);
        assert_eq!(player.coins(), 30);

        assert!(player.spend(10));
        assert_eq!(player.coins(), 20);

        assert!(player.spend(20));
        assert_eq!(player.coins(), 0);
    }

    #[test]
    fn test_overspend_rejected() {
        let mut player = Player::with_coins(40);
        assert!(!player.can_afford(50));
        assert!(!player.spend(50));
        assert_eq!(player.coins(), 40);
    }

    #[test]
    fn test_add_saturates() {
        let mut player = Player::with_coins(u32::MAX - 1);
        player.add_coins(10);
        assert_eq!(player.coins(), u32::MAX);
    }
}
