//! N-gram backoff strategy
//!
//! Looks for revealed letter pairs followed by a masked cell and predicts the
//! masked letter from ranked trigram, then bigram tables. When neither table
//! produces a usable letter it backs off to a unigram ordering.
//!
//! Selection is deterministic: tables are walked in rank order and the first
//! qualifying match wins.

use super::fixed_order::{OXFORD, pick_from_ordering};
use super::{Action, Strategy, TurnView, tables};
use crate::core::{Board, Letter, PLACEHOLDER, VOWEL_COST, letters_from};

/// Which table produced the choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NGramTier {
    /// Revealed pair + masked cell matched a trigram
    Trigram,
    /// Revealed letter + masked cell matched a bigram
    Bigram,
    /// No context match; letter frequency order
    Unigram,
}

/// Trigram → bigram → unigram backoff strategy
#[derive(Debug, Clone)]
pub struct NGramStrategy {
    trigrams: Vec<[Letter; 3]>,
    bigrams: Vec<[Letter; 2]>,
    unigrams: Vec<Letter>,
    vowel_threshold: u32,
}

impl NGramStrategy {
    /// Create a strategy from ranked tables
    #[must_use]
    pub fn new(
        trigrams: Vec<[Letter; 3]>,
        bigrams: Vec<[Letter; 2]>,
        unigrams: Vec<Letter>,
        vowel_threshold: u32,
    ) -> Self {
        Self {
            trigrams,
            bigrams,
            unigrams,
            vowel_threshold: vowel_threshold.max(VOWEL_COST),
        }
    }

    /// Replace the bigram table, e.g. with one loaded from disk
    #[must_use]
    pub fn with_bigrams(mut self, bigrams: Vec<[Letter; 2]>) -> Self {
        self.bigrams = bigrams;
        self
    }

    #[must_use]
    pub fn bigrams(&self) -> &[[Letter; 2]] {
        &self.bigrams
    }

    /// Select an action and report which tier produced it
    ///
    /// Returns `None` when no letter in any table is usable.
    #[must_use]
    pub fn select(&self, view: &TurnView<'_>) -> Option<(Action, NGramTier)> {
        let can_buy = view.balance() >= self.vowel_threshold;

        let trigram_contexts = masked_tail_contexts(view.board, 3);
        if let Some(letter) = first_match(&self.trigrams, &trigram_contexts, view, can_buy) {
            return Some((letter_action(letter), NGramTier::Trigram));
        }

        let bigram_contexts = masked_tail_contexts(view.board, 2);
        if let Some(letter) = first_match(&self.bigrams, &bigram_contexts, view, can_buy) {
            return Some((letter_action(letter), NGramTier::Bigram));
        }

        pick_from_ordering(view, &self.unigrams, self.vowel_threshold)
            .map(|action| (action, NGramTier::Unigram))
    }
}

impl Default for NGramStrategy {
    /// Built-in trigrams and bigrams with the Oxford unigram order
    fn default() -> Self {
        Self::new(
            tables::builtin_trigrams(),
            tables::builtin_bigrams(),
            letters_from(OXFORD),
            VOWEL_COST,
        )
    }
}

impl Strategy for NGramStrategy {
    fn choose_action(&self, view: &TurnView<'_>) -> Action {
        self.select(view)
            .map_or_else(|| view.board_as_solve(), |(action, _)| action)
    }
}

/// Revealed prefixes of every `n`-wide window, within a word, whose last cell
/// is masked and whose other cells are all revealed
///
/// # Examples
/// ```
/// use wheel_of_fortune::core::Board;
/// use wheel_of_fortune::strategy::masked_tail_contexts;
///
/// let board = Board::from_mask("TH_ _N_").unwrap();
/// assert_eq!(masked_tail_contexts(&board, 3), vec![&b"TH"[..]]);
/// assert_eq!(masked_tail_contexts(&board, 2), vec![&b"H"[..], &b"N"[..]]);
/// ```
#[must_use]
pub fn masked_tail_contexts(board: &Board, n: usize) -> Vec<&[u8]> {
    if n < 2 {
        return Vec::new();
    }
    board
        .words()
        .flat_map(|word| word.windows(n))
        .filter(|window| {
            window[n - 1] == PLACEHOLDER && window[..n - 1].iter().all(|&c| c != PLACEHOLDER)
        })
        .map(|window| &window[..n - 1])
        .collect()
}

/// First table entry, in rank order, whose prefix appears in `contexts` and
/// whose final letter is open and affordable
fn first_match<const N: usize>(
    table: &[[Letter; N]],
    contexts: &[&[u8]],
    view: &TurnView<'_>,
    can_buy: bool,
) -> Option<Letter> {
    if contexts.is_empty() {
        return None;
    }
    table.iter().find_map(|gram| {
        let (prefix, last) = gram.split_at(N - 1);
        let candidate = last[0];

        let in_context = contexts
            .iter()
            .any(|ctx| ctx.iter().copied().eq(prefix.iter().map(|l| l.byte())));
        let usable = view.is_open(candidate) && (candidate.is_consonant() || can_buy);

        (in_context && usable).then_some(candidate)
    })
}

fn letter_action(letter: Letter) -> Action {
    if letter.is_vowel() {
        Action::BuyVowel(letter)
    } else {
        Action::Spin(letter)
    }
}
