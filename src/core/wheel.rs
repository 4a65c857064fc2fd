//! The prize wheel
//!
//! A wheel is a fixed multiset of outcomes. Spinning is a single uniform draw;
//! repeating a value on the wheel is how its odds are weighted.

use super::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Result of one spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Balance is wiped and the turn passes
    Bankrupt,
    /// The turn passes
    LoseTurn,
    /// Dollars earned per occurrence of the next consonant
    Cash(u32),
}

impl Outcome {
    /// Cash value of the outcome, zero for the sentinels
    #[must_use]
    pub const fn reward(self) -> u32 {
        match self {
            Self::Cash(amount) => amount,
            Self::Bankrupt | Self::LoseTurn => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bankrupt => write!(f, "BANKRUPT"),
            Self::LoseTurn => write!(f, "LOSE A TURN"),
            Self::Cash(amount) => write!(f, "${amount}"),
        }
    }
}

/// A weighted random-reward generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    slots: Vec<Outcome>,
}

impl Wheel {
    /// Create a wheel from its slots
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if there are no slots or a cash slot
    /// is worth nothing.
    pub fn new(slots: Vec<Outcome>) -> Result<Self, GameError> {
        if slots.is_empty() {
            return Err(GameError::InvalidInput("Wheel has no slots".to_string()));
        }
        if slots.contains(&Outcome::Cash(0)) {
            return Err(GameError::InvalidInput(
                "Cash slots must be worth more than $0".to_string(),
            ));
        }
        Ok(Self { slots })
    }

    /// The 24-slot wheel: one LOSE A TURN, two BANKRUPT, and 21 cash slots
    /// between $500 and $900
    #[must_use]
    pub fn standard() -> Self {
        const CASH: [u32; 21] = [
            500, 550, 600, 650, 700, 750, 800, 850, 900, //
            500, 550, 600, 650, 700, 750, 800, 850, 900, //
            500, 550, 600,
        ];

        let mut slots = vec![Outcome::LoseTurn, Outcome::Bankrupt, Outcome::Bankrupt];
        slots.extend(CASH.iter().map(|&amount| Outcome::Cash(amount)));
        Self { slots }
    }

    /// Every slot on the wheel
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Outcome] {
        &self.slots
    }

    /// Positive cash values on the wheel, with repeats
    pub fn cash_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Outcome::Cash(amount) => Some(*amount),
            _ => None,
        })
    }

    /// Spin the wheel
    ///
    /// Memoryless: the draw depends only on the random source, so a seeded
    /// source reproduces the same sequence of outcomes.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        *self
            .slots
            .choose(rng)
            .unwrap_or(&Outcome::LoseTurn)
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::standard()
    }
}
