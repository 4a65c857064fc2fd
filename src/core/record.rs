//! Shared record of guessed letters
//!
//! One record per game, shared by every contestant: a letter called by anyone
//! can't be called again.

use super::{GameError, Letter};

/// Append-only, duplicate-free sequence of guessed letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRecord {
    letters: Vec<Letter>,
}

impl GuessRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter
    ///
    /// # Errors
    /// Returns `GameError::DuplicateGuess` if the letter is already recorded;
    /// the record is left untouched.
    pub fn record(&mut self, letter: Letter) -> Result<(), GameError> {
        if self.contains(letter) {
            return Err(GameError::DuplicateGuess(letter));
        }
        self.letters.push(letter);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<Letter> for GuessRecord {
    /// Build a record, silently dropping repeats
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut record = Self::new();
        for letter in iter {
            let _ = record.record(letter);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(b: u8) -> Letter {
        Letter::new(b).unwrap()
    }

    #[test]
    fn record_keeps_guess_order() {
        let mut record = GuessRecord::new();
        record.record(letter(b'T')).unwrap();
        record.record(letter(b'E')).unwrap();
        record.record(letter(b'S')).unwrap();

        let order: String = record.letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(order, "TES");
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn duplicate_is_rejected_without_change() {
        let mut record = GuessRecord::new();
        record.record(letter(b'R')).unwrap();

        let result = record.record(letter(b'r'));
        assert_eq!(result, Err(GameError::DuplicateGuess(letter(b'R'))));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn from_iter_drops_repeats() {
        let record: GuessRecord = [b'A', b'B', b'A'].iter().map(|&b| letter(b)).collect();
        assert_eq!(record.len(), 2);
        assert!(record.contains(letter(b'B')));
        assert!(!record.contains(letter(b'C')));
    }
}
