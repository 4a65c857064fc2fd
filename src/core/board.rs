//! Revealed mask of a phrase and guess resolution
//!
//! The board is the only view of the puzzle that contestants get. Letters start
//! masked with [`PLACEHOLDER`]; spaces and punctuation are always visible.
//! Positions only ever go from masked to revealed.

use super::{GameError, Letter, Phrase, phrase::PUNCTUATION};
use std::fmt;

/// Marker for a masked letter
pub const PLACEHOLDER: u8 = b'_';

/// Current reveal state of a phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<u8>,
}

impl Board {
    /// Fully masked board for a phrase
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::{Board, Phrase};
    ///
    /// let phrase = Phrase::new("NEW YORK CITY").unwrap();
    /// let board = Board::new(&phrase);
    /// assert_eq!(board.to_string(), "___ ____ ____");
    /// ```
    #[must_use]
    pub fn new(phrase: &Phrase) -> Self {
        let cells = phrase
            .bytes()
            .iter()
            .map(|&b| if b.is_ascii_uppercase() { PLACEHOLDER } else { b })
            .collect();
        Self { cells }
    }

    /// Parse a board written as text, e.g. `"TH_ C_T"`
    ///
    /// Used to analyze positions that were not produced by a running game.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` for an empty mask or characters other
    /// than letters, `_`, spaces and phrase punctuation.
    pub fn from_mask(mask: &str) -> Result<Self, GameError> {
        let mask = mask.trim().to_ascii_uppercase();
        if mask.is_empty() {
            return Err(GameError::InvalidInput("Board is empty".to_string()));
        }
        if let Some(bad) = mask.bytes().find(|&b| {
            !(b.is_ascii_uppercase() || b == PLACEHOLDER || b == b' ' || PUNCTUATION.contains(&b))
        }) {
            return Err(GameError::InvalidInput(format!(
                "Board contains unsupported character '{}'",
                char::from(bad)
            )));
        }
        Ok(Self {
            cells: mask.into_bytes(),
        })
    }

    /// Raw cells, revealed characters or [`PLACEHOLDER`]
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of positions still masked
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == PLACEHOLDER).count()
    }

    /// Whether every letter has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&PLACEHOLDER)
    }

    /// Whether the board shows exactly the phrase
    #[must_use]
    pub fn reveals(&self, phrase: &Phrase) -> bool {
        self.cells == phrase.bytes()
    }

    /// Space separated words of the board
    pub fn words(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.split(|&c| c == b' ').filter(|w| !w.is_empty())
    }

    /// Reveal a letter at the given positions
    fn reveal(&mut self, letter: Letter, positions: &[usize]) {
        for &i in positions {
            if let Some(cell) = self.cells.get_mut(i) {
                *cell = letter.byte();
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cells are ASCII by construction
        f.write_str(&String::from_utf8_lossy(&self.cells))
    }
}

/// Apply a guessed letter to a board
///
/// Returns the updated board and every position where the phrase holds the
/// letter. A letter with no occurrences is a miss: the position list is empty
/// and the board comes back unchanged. The resolver has no notion of guess
/// history, repeated guesses are the scheduler's concern.
///
/// A board that doesn't fit the phrase, e.g. one parsed with
/// [`Board::from_mask`], only has the positions it covers revealed.
///
/// # Examples
/// ```
/// use wheel_of_fortune::core::{apply_guess, Board, Letter, Phrase};
///
/// let phrase = Phrase::new("CAT").unwrap();
/// let board = Board::new(&phrase);
///
/// let (board, positions) = apply_guess(&board, &phrase, Letter::new(b'c').unwrap());
/// assert_eq!(positions, vec![0]);
/// assert_eq!(board.to_string(), "C__");
/// ```
#[must_use]
pub fn apply_guess(board: &Board, phrase: &Phrase, letter: Letter) -> (Board, Vec<usize>) {
    let positions = phrase.positions_of(letter).to_vec();
    let mut next = board.clone();
    next.reveal(letter, &positions);
    (next, positions)
}
