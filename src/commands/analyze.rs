//! Board analysis command
//!
//! Shows what every computer strategy would do from a given position.

use crate::core::{Board, GameError, GuessRecord, Ledger, Letter};
use crate::game::PLAYER_COUNT;
use crate::strategy::{Action, NGramTier, Strategy, StrategyType, TurnView};

/// One strategy's decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyChoice {
    pub name: &'static str,
    pub action: Action,
    /// Table that produced an n-gram choice
    pub tier: Option<NGramTier>,
}

/// Result of analyzing a position
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub board: Board,
    pub guessed: GuessRecord,
    pub balance: u32,
    pub choices: Vec<StrategyChoice>,
}

/// Ask every computer strategy for its action on a board
///
/// `guessed` lists letters already called, separated by anything that isn't
/// a letter; letters showing on the board count as called too. N-gram
/// strategies use `bigrams` unless it is empty.
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if the board can't be parsed.
pub fn analyze_board(
    mask: &str,
    guessed: &str,
    balance: u32,
    bigrams: &[[Letter; 2]],
) -> Result<AnalysisResult, GameError> {
    let board = Board::from_mask(mask)?;

    let record: GuessRecord = guessed
        .bytes()
        .chain(board.cells().iter().copied())
        .filter_map(|b| Letter::new(b).ok())
        .collect();

    let mut ledger = Ledger::new(PLAYER_COUNT);
    ledger.credit(0, balance);

    let view = TurnView {
        board: &board,
        ledger: &ledger,
        guessed: &record,
        player: 0,
    };

    let choices = StrategyType::NAMES
        .iter()
        .filter_map(|&name| StrategyType::from_name(name))
        .map(|strategy| match strategy {
            StrategyType::NGram(ngram) => {
                let ngram = if bigrams.is_empty() {
                    ngram
                } else {
                    ngram.with_bigrams(bigrams.to_vec())
                };
                let (action, tier) = ngram
                    .select(&view)
                    .map_or_else(|| (view.board_as_solve(), None), |(a, t)| (a, Some(t)));
                StrategyChoice {
                    name: "trigram",
                    action,
                    tier,
                }
            }
            fixed @ StrategyType::FixedOrder(_) => StrategyChoice {
                name: fixed.name(),
                action: fixed.choose_action(&view),
                tier: None,
            },
        })
        .collect();

    Ok(AnalysisResult {
        board,
        guessed: record,
        balance,
        choices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice<'a>(result: &'a AnalysisResult, name: &str) -> &'a StrategyChoice {
        result.choices.iter().find(|c| c.name == name).unwrap()
    }

    fn letter(b: u8) -> Letter {
        Letter::new(b).unwrap()
    }

    #[test]
    fn every_strategy_answers() {
        let result = analyze_board("___ ___", "", 0, &[]).unwrap();
        assert_eq!(result.choices.len(), StrategyType::NAMES.len());
    }

    #[test]
    fn revealed_letters_count_as_guessed() {
        let result = analyze_board("TH_", "", 0, &[]).unwrap();
        assert!(result.guessed.contains(letter(b'T')));
        assert!(result.guessed.contains(letter(b'H')));

        // Smart would call T first, but T is showing
        assert_eq!(choice(&result, "smart").action, Action::Spin(letter(b'N')));
    }

    #[test]
    fn trigram_choice_reports_tier() {
        let result = analyze_board("TH_", "", 250, &[]).unwrap();
        let trigram = choice(&result, "trigram");
        assert_eq!(trigram.action, Action::BuyVowel(letter(b'E')));
        assert_eq!(trigram.tier, Some(NGramTier::Trigram));
    }

    #[test]
    fn guessed_list_accepts_separators() {
        let result = analyze_board("____", "r, s t", 0, &[]).unwrap();
        assert_eq!(result.guessed.len(), 3);
        assert_eq!(choice(&result, "conservative").action, Action::Spin(letter(b'L')));
    }

    #[test]
    fn balance_enables_vowels() {
        let result = analyze_board("____", "", 300, &[]).unwrap();
        assert_eq!(choice(&result, "alphabetical").action, Action::BuyVowel(letter(b'A')));
        assert_eq!(choice(&result, "conservative").action, Action::Spin(letter(b'R')));
    }

    #[test]
    fn bad_board_is_rejected() {
        assert!(matches!(
            analyze_board("T#E", "", 0, &[]),
            Err(GameError::InvalidInput(_))
        ));
    }
}
