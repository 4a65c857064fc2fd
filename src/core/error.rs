//! Error kinds shared by the game engine
//!
//! None of these are fatal: human input errors are re-prompted, computer
//! actions are rejected before they mutate anything, and missing resources
//! fall back to built-in data.

use super::Letter;
use thiserror::Error;

/// Errors raised by the core game model and its collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Malformed entry (wrong length, non-letter, wrong letter category)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The letter is already in the shared guess record
    #[error("'{0}' has already been guessed")]
    DuplicateGuess(Letter),

    /// Balance is below the cost of a vowel
    #[error("Insufficient funds: balance ${balance}, a vowel costs ${cost}")]
    InsufficientFunds { balance: u32, cost: u32 },

    /// A puzzle list or frequency table could not be read
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// The human input stream ended
    #[error("Input closed")]
    InputClosed,
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
