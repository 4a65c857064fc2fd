//! Per-contestant winnings ledger
//!
//! Balances change only through `credit`, `buy_vowel` and `bankrupt`, and can
//! never go below zero.

use super::GameError;

/// Price of buying a vowel
pub const VOWEL_COST: u32 = 250;

/// Winnings for every contestant, indexed by seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balances: Vec<u32>,
}

impl Ledger {
    /// Ledger with every balance at zero
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            balances: vec![0; players],
        }
    }

    /// Current balance of a contestant
    ///
    /// # Panics
    /// Panics if `player` is not a seat in this ledger
    #[inline]
    #[must_use]
    pub fn balance(&self, player: usize) -> u32 {
        self.balances[player]
    }

    /// All balances, by seat
    #[inline]
    #[must_use]
    pub fn balances(&self) -> &[u32] {
        &self.balances
    }

    #[inline]
    #[must_use]
    pub fn can_buy_vowel(&self, player: usize) -> bool {
        self.balance(player) >= VOWEL_COST
    }

    /// Debit the cost of a vowel
    ///
    /// # Errors
    /// Returns `GameError::InsufficientFunds` when the balance is below
    /// [`VOWEL_COST`]; the balance is not touched.
    pub fn buy_vowel(&mut self, player: usize) -> Result<(), GameError> {
        let balance = self.balance(player);
        if balance < VOWEL_COST {
            return Err(GameError::InsufficientFunds {
                balance,
                cost: VOWEL_COST,
            });
        }
        self.balances[player] = balance - VOWEL_COST;
        Ok(())
    }

    /// Add earnings (reward times occurrences)
    pub fn credit(&mut self, player: usize, amount: u32) {
        self.balances[player] = self.balances[player].saturating_add(amount);
    }

    /// Wipe a balance to zero, whatever it was
    pub fn bankrupt(&mut self, player: usize) {
        self.balances[player] = 0;
    }
}
