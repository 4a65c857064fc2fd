//! Secret phrase representation
//!
//! A Phrase stores the puzzle text along with letter position indices so a
//! guess can be resolved without rescanning the text.

use super::{GameError, Letter};
use rustc_hash::FxHashMap;
use std::fmt;

/// Punctuation allowed in a phrase besides letters and spaces
pub const PUNCTUATION: &[u8] = b"'-&.,!?:";

/// An immutable, uppercase puzzle phrase with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

impl Phrase {
    /// Create a new Phrase from a string
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if:
    /// - The text is empty or has no letters
    /// - The text contains anything other than ASCII letters, spaces and
    ///   [`PUNCTUATION`]
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::Phrase;
    ///
    /// let phrase = Phrase::new("wheel of fortune").unwrap();
    /// assert_eq!(phrase.text(), "WHEEL OF FORTUNE");
    ///
    /// assert!(Phrase::new("R2-D2").is_err());
    /// assert!(Phrase::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text: String = text.into().trim().to_ascii_uppercase();

        if let Some(bad) = text
            .bytes()
            .find(|&b| !(b.is_ascii_uppercase() || b == b' ' || PUNCTUATION.contains(&b)))
        {
            return Err(GameError::InvalidInput(format!(
                "Phrase contains unsupported character '{}'",
                char::from(bad)
            )));
        }

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, byte) in text.bytes().enumerate() {
            if byte.is_ascii_uppercase() {
                letter_positions.entry(byte).or_default().push(i);
            }
        }

        if letter_positions.is_empty() {
            return Err(GameError::InvalidInput(
                "Phrase must contain at least one letter".to_string(),
            ));
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the phrase as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the phrase as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of characters, including spaces and punctuation
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// A phrase always holds at least one letter
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter.byte())
            .map_or(&[], Vec::as_slice)
    }

    /// Distinct letters in the phrase
    pub fn distinct_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letter_positions.keys().map(|&b| Letter::from_upper(b))
    }

    /// Whether a solve attempt matches this phrase
    ///
    /// Comparison ignores case and surrounding whitespace.
    #[must_use]
    pub fn matches(&self, attempt: &str) -> bool {
        attempt.trim().eq_ignore_ascii_case(&self.text)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
