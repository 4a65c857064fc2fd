//! Core domain types for the puzzle board
//!
//! Pure game model: letters, the secret phrase, its revealed board, the shared
//! guess record, the wheel and the winnings ledger. Nothing here does I/O.

mod board;
mod economy;
mod error;
mod letter;
mod phrase;
mod record;
mod wheel;

pub use board::{Board, PLACEHOLDER, apply_guess};
pub use economy::{Ledger, VOWEL_COST};
pub use error::{GameError, GameResult};
pub use letter::{Letter, VOWELS, letters_from};
pub use phrase::{PUNCTUATION, Phrase};
pub use record::GuessRecord;
pub use wheel::{Outcome, Wheel};
