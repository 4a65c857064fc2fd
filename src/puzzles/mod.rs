//! Puzzles for the game
//!
//! A built-in list is compiled into the binary; a CSV file can replace it.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLE_ROWS, PUZZLE_ROWS_COUNT};

use crate::core::{GameError, Phrase};
use log::warn;
use rand::Rng;
use std::path::Path;

/// A phrase, its category clue and the show segment it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    phrase: Phrase,
    category: String,
    game_type: Option<String>,
}

impl Puzzle {
    /// # Errors
    /// Returns `GameError::InvalidInput` if the phrase can't be played.
    pub fn new(phrase: &str, category: &str) -> Result<Self, GameError> {
        Ok(Self {
            phrase: Phrase::new(phrase)?,
            category: category.trim().to_string(),
            game_type: None,
        })
    }

    /// Tag the puzzle with its game type, e.g. `SHOW BIZ`; blank tags are dropped
    #[must_use]
    pub fn with_game_type(mut self, game_type: &str) -> Self {
        let game_type = game_type.trim();
        self.game_type = (!game_type.is_empty()).then(|| game_type.to_string());
        self
    }

    #[inline]
    #[must_use]
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    #[must_use]
    pub fn game_type(&self) -> Option<&str> {
        self.game_type.as_deref()
    }
}

/// A non-empty collection of puzzles
#[derive(Debug, Clone)]
pub struct PuzzleBook {
    puzzles: Vec<Puzzle>,
}

impl PuzzleBook {
    /// # Errors
    /// Returns `GameError::ResourceUnavailable` for an empty list.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, GameError> {
        if puzzles.is_empty() {
            return Err(GameError::ResourceUnavailable(
                "No puzzles to play".to_string(),
            ));
        }
        Ok(Self { puzzles })
    }

    /// The built-in puzzle list
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            puzzles: loader::puzzles_from_rows(PUZZLE_ROWS.iter().copied()),
        }
    }

    /// Load puzzles from a CSV file
    ///
    /// # Errors
    /// Returns `GameError::ResourceUnavailable` if the file is missing or has
    /// no playable rows.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Load from `path` if given, falling back to the built-in list
    #[must_use]
    pub fn load_or_embedded(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::embedded();
        };
        match Self::from_file(path) {
            Ok(book) => book,
            Err(e) => {
                warn!("{e}; using built-in puzzles");
                Self::embedded()
            }
        }
    }

    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Never true for a constructed book
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Draw one puzzle uniformly at random
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Puzzle {
        &self.puzzles[rng.random_range(0..self.puzzles.len())]
    }
}

impl Default for PuzzleBook {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rows_count_matches_const() {
        assert_eq!(PUZZLE_ROWS.len(), PUZZLE_ROWS_COUNT);
    }

    #[test]
    fn every_embedded_row_is_playable() {
        let book = PuzzleBook::embedded();
        assert_eq!(book.len(), PUZZLE_ROWS_COUNT);
        assert!(!book.is_empty());
    }

    #[test]
    fn embedded_rows_decode_html_ampersand() {
        let book = PuzzleBook::embedded();
        assert!(
            book.puzzles()
                .iter()
                .any(|p| p.phrase().text() == "PEANUT BUTTER & JELLY")
        );
        assert!(book.puzzles().iter().all(|p| !p.phrase().text().contains("AMP;")));
    }

    #[test]
    fn empty_book_is_rejected() {
        assert!(matches!(
            PuzzleBook::new(Vec::new()),
            Err(GameError::ResourceUnavailable(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_embedded() {
        let book = PuzzleBook::load_or_embedded(Some(Path::new("/definitely/not/here.csv")));
        assert_eq!(book.len(), PuzzleBook::embedded().len());
    }

    #[test]
    fn random_draw_is_seeded() {
        let book = PuzzleBook::embedded();
        let a = book.random(&mut StdRng::seed_from_u64(9)).clone();
        let b = book.random(&mut StdRng::seed_from_u64(9)).clone();
        assert_eq!(a, b);
    }
}
