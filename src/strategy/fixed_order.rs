//! Fixed letter-ordering strategies
//!
//! Walk a static ordering of the alphabet and take the first letter that is
//! still open: a consonant is spun for, a vowel is bought when the balance
//! allows it and skipped otherwise.

use super::{Action, Strategy, TurnView};
use crate::core::{Letter, VOWEL_COST, letters_from};

/// Plain alphabetical order
pub const ALPHABETICAL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The order Samuel Morse ranked letters for his code
pub const MORSE: &[u8] = b"ETAINOSHRDLUCMFWYGPBVKQJXZ";

/// Concise Oxford Dictionary letter frequency
pub const OXFORD: &[u8] = b"EARIOTNSLCUDPMHGBFYWKVXZJQ";

/// Running-text letter frequency
pub const ETAOIN: &[u8] = b"ETAOINSHRDLUCMFWYGPBVKQJXZ";

/// Bonus round letters first, then the Oxford order
pub const RSTLNE: &[u8] = b"RSTLNEAIOCUDPMHGBFYWKVXZJQ";

/// Named orderings with their vowel-buying policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterOrder {
    Alphabetical,
    Morse,
    Oxford,
    Smart,
    Aggressive,
    /// Holds on to $500 before buying vowels
    Conservative,
}

impl LetterOrder {
    #[must_use]
    pub const fn letters(self) -> &'static [u8] {
        match self {
            Self::Alphabetical => ALPHABETICAL,
            Self::Morse => MORSE,
            Self::Oxford => OXFORD,
            Self::Smart | Self::Aggressive => ETAOIN,
            Self::Conservative => RSTLNE,
        }
    }

    /// Lowest balance at which a vowel is bought
    #[must_use]
    pub const fn vowel_threshold(self) -> u32 {
        match self {
            Self::Conservative => 2 * VOWEL_COST,
            _ => VOWEL_COST,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::Morse => "morse",
            Self::Oxford => "oxford",
            Self::Smart => "smart",
            Self::Aggressive => "aggressive",
            Self::Conservative => "conservative",
        }
    }
}

/// Strategy that follows one static letter ordering
#[derive(Debug, Clone)]
pub struct FixedOrderStrategy {
    name: &'static str,
    ordering: Vec<Letter>,
    vowel_threshold: u32,
}

impl FixedOrderStrategy {
    /// Create a strategy from an ordering and a vowel-buying threshold
    ///
    /// The threshold is raised to [`VOWEL_COST`] if set below it, so the
    /// strategy never tries a purchase it cannot afford.
    #[must_use]
    pub fn new(name: &'static str, ordering: &[u8], vowel_threshold: u32) -> Self {
        Self {
            name,
            ordering: letters_from(ordering),
            vowel_threshold: vowel_threshold.max(VOWEL_COST),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn ordering(&self) -> &[Letter] {
        &self.ordering
    }

    #[must_use]
    pub const fn vowel_threshold(&self) -> u32 {
        self.vowel_threshold
    }

    /// First eligible action in the ordering, if any letter qualifies
    #[must_use]
    pub fn next_letter_action(&self, view: &TurnView<'_>) -> Option<Action> {
        pick_from_ordering(view, &self.ordering, self.vowel_threshold)
    }
}

impl From<LetterOrder> for FixedOrderStrategy {
    fn from(ordering: LetterOrder) -> Self {
        Self::new(ordering.name(), ordering.letters(), ordering.vowel_threshold())
    }
}

impl Strategy for FixedOrderStrategy {
    fn choose_action(&self, view: &TurnView<'_>) -> Action {
        self.next_letter_action(view)
            .unwrap_or_else(|| view.board_as_solve())
    }
}

/// Walk an ordering and return the first open letter the contestant can use
pub(super) fn pick_from_ordering(
    view: &TurnView<'_>,
    ordering: &[Letter],
    vowel_threshold: u32,
) -> Option<Action> {
    let can_buy = view.balance() >= vowel_threshold.max(VOWEL_COST);

    ordering
        .iter()
        .copied()
        .filter(|&letter| view.is_open(letter))
        .find(|letter| letter.is_consonant() || can_buy)
        .map(|letter| {
            if letter.is_vowel() {
                Action::BuyVowel(letter)
            } else {
                Action::Spin(letter)
            }
        })
}
