//! Computer contestant strategies
//!
//! Strategies never see the phrase. They pick an action from the board, the
//! ledger and the shared guess record, and they never name a letter that has
//! already been guessed.

mod fixed_order;
mod ngram;
pub mod tables;

pub use fixed_order::{FixedOrderStrategy, LetterOrder};
pub use ngram::{NGramStrategy, NGramTier, masked_tail_contexts};

use crate::core::{Board, GuessRecord, Ledger, Letter};

/// What a contestant does with their turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Spin the wheel, calling this consonant if it lands on cash
    Spin(Letter),
    /// Pay for a vowel
    BuyVowel(Letter),
    /// Attempt to solve the puzzle
    Solve(String),
}

/// Read-only view of the game handed to a strategy
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub board: &'a Board,
    pub ledger: &'a Ledger,
    pub guessed: &'a GuessRecord,
    pub player: usize,
}

impl TurnView<'_> {
    /// Balance of the acting contestant
    #[inline]
    #[must_use]
    pub fn balance(&self) -> u32 {
        self.ledger.balance(self.player)
    }

    /// Whether a letter may still be called
    #[inline]
    #[must_use]
    pub fn is_open(&self, letter: Letter) -> bool {
        !self.guessed.contains(letter)
    }

    /// Solve attempt built from the current board
    ///
    /// Correct once every letter is revealed; before that it is a wrong guess
    /// that simply passes the turn.
    #[must_use]
    pub fn board_as_solve(&self) -> Action {
        Action::Solve(self.board.to_string())
    }
}

/// A strategy for choosing a computer contestant's action
pub trait Strategy {
    /// Choose the action for this turn
    fn choose_action(&self, view: &TurnView<'_>) -> Action;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Walks a static letter ordering
    FixedOrder(FixedOrderStrategy),
    /// Trigram, then bigram, then unigram prediction from the board
    NGram(NGramStrategy),
}

impl Strategy for StrategyType {
    fn choose_action(&self, view: &TurnView<'_>) -> Action {
        match self {
            Self::FixedOrder(s) => s.choose_action(view),
            Self::NGram(s) => s.choose_action(view),
        }
    }
}

impl StrategyType {
    /// Every computer strategy tag accepted by [`StrategyType::from_name`]
    pub const NAMES: &'static [&'static str] = &[
        "alphabetical",
        "morse",
        "oxford",
        "smart",
        "aggressive",
        "conservative",
        "trigram",
    ];

    /// Create strategy from name string
    ///
    /// Returns `None` for names that are not computer strategies.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let ordering = match name.trim().to_ascii_lowercase().as_str() {
            "alphabetical" | "alphabet" => LetterOrder::Alphabetical,
            "morse" => LetterOrder::Morse,
            "oxford" => LetterOrder::Oxford,
            "smart" => LetterOrder::Smart,
            "aggressive" => LetterOrder::Aggressive,
            "conservative" => LetterOrder::Conservative,
            "trigram" | "ngram" => return Some(Self::NGram(NGramStrategy::default())),
            _ => return None,
        };
        Some(Self::FixedOrder(FixedOrderStrategy::from(ordering)))
    }

    /// Display name of the strategy
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FixedOrder(s) => s.name(),
            Self::NGram(_) => "trigram",
        }
    }
}
