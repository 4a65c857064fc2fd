//! Single puzzle letters
//!
//! A Letter is always an uppercase ASCII letter, so vowel/consonant checks and
//! comparisons against the phrase never need case folding.

use super::GameError;
use std::fmt;

/// The five letters that must be bought instead of spun for
pub const VOWELS: &[u8] = b"AEIOU";

/// An uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a byte, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the byte is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wheel_of_fortune::core::Letter;
    ///
    /// let letter = Letter::new(b'e').unwrap();
    /// assert_eq!(letter.byte(), b'E');
    /// assert!(letter.is_vowel());
    ///
    /// assert!(Letter::new(b'3').is_err());
    /// ```
    pub fn new(byte: u8) -> Result<Self, GameError> {
        if byte.is_ascii_alphabetic() {
            Ok(Self(byte.to_ascii_uppercase()))
        } else {
            Err(GameError::InvalidInput(format!(
                "'{}' is not a letter",
                char::from(byte)
            )))
        }
    }

    /// Parse a letter typed by a human
    ///
    /// Surrounding whitespace is ignored; anything other than exactly one
    /// letter is rejected.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` for empty, multi-character or
    /// non-letter input.
    pub fn parse(input: &str) -> Result<Self, GameError> {
        match input.trim().as_bytes() {
            [byte] => Self::new(*byte),
            _ => Err(GameError::InvalidInput(
                "Guess exactly one letter".to_string(),
            )),
        }
    }

    /// Build a letter from a byte already known to be an uppercase letter
    pub(crate) const fn from_upper(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_uppercase());
        Self(byte)
    }

    /// Raw uppercase byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Letter as a `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub fn is_vowel(self) -> bool {
        VOWELS.contains(&self.0)
    }

    #[inline]
    #[must_use]
    pub fn is_consonant(self) -> bool {
        !self.is_vowel()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Convert an uppercase ordering such as `b"ETAOIN"` into letters
///
/// Non-letters are skipped.
#[must_use]
pub fn letters_from(ordering: &[u8]) -> Vec<Letter> {
    ordering
        .iter()
        .filter_map(|&byte| Letter::new(byte).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_to_uppercase() {
        assert_eq!(Letter::new(b'q').unwrap().byte(), b'Q');
        assert_eq!(Letter::new(b'Q').unwrap().byte(), b'Q');
    }

    #[test]
    fn letter_rejects_non_letters() {
        for byte in [b'1', b' ', b'_', b'&', b'\''] {
            assert!(matches!(
                Letter::new(byte),
                Err(GameError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn parse_trims_and_checks_length() {
        assert_eq!(Letter::parse("  r\n").unwrap().byte(), b'R');
        assert!(Letter::parse("").is_err());
        assert!(Letter::parse("rs").is_err());
        assert!(Letter::parse("7").is_err());
    }

    #[test]
    fn vowel_and_consonant_are_exclusive() {
        for byte in b'A'..=b'Z' {
            let letter = Letter::new(byte).unwrap();
            assert_ne!(letter.is_vowel(), letter.is_consonant());
        }
        assert!(Letter::new(b'u').unwrap().is_vowel());
        assert!(Letter::new(b'y').unwrap().is_consonant());
    }

    #[test]
    fn letters_from_skips_non_letters() {
        let letters = letters_from(b"R S-T");
        let text: String = letters.iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "RST");
    }
}
