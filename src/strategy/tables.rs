//! Ranked n-gram frequency tables
//!
//! Trigrams and the fallback bigrams are the most common English n-grams, in
//! rank order. A longer bigram list can be loaded from a text file with one
//! bigram per line, optionally followed by its count.

use crate::core::{GameError, Letter};
use log::warn;
use std::fs;
use std::path::Path;

/// Most common trigrams, in order
pub const TRIGRAMS: &[&str] = &[
    "THE", "AND", "THA", "ENT", "ING", "ION", "TIO", "FOR", "NDE", "HAS", "NCE", "EDT", "TIS",
    "OFT", "STH", "MEN",
];

/// Most common bigrams, in order; used when no bigram file is available
pub const BIGRAMS: &[&str] = &[
    "TH", "HE", "IN", "EN", "NT", "RE", "ER", "AN", "TI", "ES", "ON", "AT", "SE", "ND", "OR", "AR",
    "AL", "TE", "CO", "DE", "TO", "RA", "ET", "ED", "IT", "SA", "EM", "RO",
];

/// Number of bigrams kept from a loaded file
pub const BIGRAM_LIMIT: usize = 128;

/// Parse one n-gram of exactly `N` letters
///
/// # Examples
/// ```
/// use wheel_of_fortune::strategy::tables::ngram;
///
/// let the: [_; 3] = ngram("the").unwrap();
/// assert_eq!(the[2].as_char(), 'E');
/// assert!(ngram::<2>("t1").is_none());
/// ```
#[must_use]
pub fn ngram<const N: usize>(text: &str) -> Option<[Letter; N]> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != N {
        return None;
    }
    let mut letters = [Letter::from_upper(b'A'); N];
    for (slot, &byte) in letters.iter_mut().zip(bytes) {
        *slot = Letter::new(byte).ok()?;
    }
    Some(letters)
}

/// Parse a ranked table, keeping rank order and skipping malformed entries
#[must_use]
pub fn parse_table<'a, const N: usize>(
    entries: impl IntoIterator<Item = &'a str>,
) -> Vec<[Letter; N]> {
    entries.into_iter().filter_map(ngram::<N>).collect()
}

/// Built-in trigram table
#[must_use]
pub fn builtin_trigrams() -> Vec<[Letter; 3]> {
    parse_table(TRIGRAMS.iter().copied())
}

/// Built-in bigram table
#[must_use]
pub fn builtin_bigrams() -> Vec<[Letter; 2]> {
    parse_table(BIGRAMS.iter().copied())
}

/// Load the first [`BIGRAM_LIMIT`] bigrams from a file
///
/// Each line holds a bigram as its first whitespace-separated token, e.g.
/// `th 116997844`. Malformed lines are skipped.
///
/// # Errors
/// Returns `GameError::ResourceUnavailable` if the file cannot be read or
/// holds no usable bigrams.
pub fn load_bigrams<P: AsRef<Path>>(path: P) -> Result<Vec<[Letter; 2]>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        GameError::ResourceUnavailable(format!("bigram table {}: {e}", path.display()))
    })?;

    let bigrams: Vec<[Letter; 2]> = content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(ngram::<2>)
        .take(BIGRAM_LIMIT)
        .collect();

    if bigrams.is_empty() {
        return Err(GameError::ResourceUnavailable(format!(
            "bigram table {} has no bigrams",
            path.display()
        )));
    }
    Ok(bigrams)
}

/// Load bigrams from `path` if given, falling back to the built-in table
#[must_use]
pub fn bigrams_or_builtin(path: Option<&Path>) -> Vec<[Letter; 2]> {
    let Some(path) = path else {
        return builtin_bigrams();
    };
    match load_bigrams(path) {
        Ok(bigrams) => bigrams,
        Err(e) => {
            warn!("{e}; using built-in bigrams");
            builtin_bigrams()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn text<const N: usize>(gram: &[Letter; N]) -> String {
        gram.iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn builtin_tables_parse_completely() {
        assert_eq!(builtin_trigrams().len(), TRIGRAMS.len());
        assert_eq!(builtin_bigrams().len(), BIGRAMS.len());
        assert_eq!(text(&builtin_trigrams()[0]), "THE");
        assert_eq!(text(&builtin_bigrams()[0]), "TH");
    }

    #[test]
    fn ngram_checks_length_and_letters() {
        assert!(ngram::<3>("TH").is_none());
        assert!(ngram::<3>("T_E").is_none());
        assert_eq!(text(&ngram::<2>(" er ").unwrap()), "ER");
    }

    #[test]
    fn load_bigrams_reads_first_token() {
        let path = std::env::temp_dir().join("wheel_of_fortune_bigrams_test.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "th 116997844").unwrap();
        writeln!(file, "he 100689263").unwrap();
        writeln!(file, "??? 1").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "in 87674002").unwrap();
        drop(file);

        let bigrams = load_bigrams(&path).unwrap();
        let texts: Vec<String> = bigrams.iter().map(text).collect();
        assert_eq!(texts, vec!["TH", "HE", "IN"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_bigrams_caps_at_limit() {
        let path = std::env::temp_dir().join("wheel_of_fortune_bigrams_limit.txt");
        let mut file = fs::File::create(&path).unwrap();
        for a in b'A'..=b'Z' {
            for b in b'A'..=b'F' {
                writeln!(file, "{}{} 1", char::from(a), char::from(b)).unwrap();
            }
        }
        drop(file);

        assert_eq!(load_bigrams(&path).unwrap().len(), BIGRAM_LIMIT);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_resource_unavailable() {
        let result = load_bigrams("/definitely/not/here/bigrams.txt");
        assert!(matches!(result, Err(GameError::ResourceUnavailable(_))));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let bigrams = bigrams_or_builtin(Some(Path::new("/definitely/not/here.txt")));
        assert_eq!(bigrams, builtin_bigrams());
        assert_eq!(bigrams_or_builtin(None), builtin_bigrams());
    }
}
