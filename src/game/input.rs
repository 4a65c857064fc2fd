//! Human contestant input
//!
//! The scheduler asks a [`HumanInput`] for raw lines and validates them
//! itself. Invalid entries are reported back and asked for again; only the end
//! of the input stream stops the game.

use crate::core::{GameError, GuessRecord, Letter, VOWEL_COST};
use std::collections::VecDeque;

/// Source of typed answers for human contestants
pub trait HumanInput {
    /// Show `prompt` and read one line
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Tell the contestant why their last entry was rejected
    fn reject(&mut self, _reason: &str) {}
}

/// What a human chose to do with their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChoice {
    Spin,
    BuyVowel,
    Solve,
}

/// Menu shown at the start of a human turn
#[must_use]
pub fn choice_prompt(can_buy_vowel: bool) -> &'static str {
    if can_buy_vowel {
        "1: Spin, 2: Buy Vowel, 3: Solve"
    } else {
        "1: Spin, 3: Solve"
    }
}

/// Parse a menu entry
///
/// Accepts the menu number or the action's initial (`s`pin, `b`uy, s`o`lve).
///
/// # Errors
/// `InvalidInput` for anything else or a vowel purchase once every vowel has
/// been called, `InsufficientFunds` for a vowel purchase the contestant can't
/// afford.
pub fn parse_choice(line: &str, balance: u32, vowels_left: bool) -> Result<TurnChoice, GameError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "s" | "spin" => Ok(TurnChoice::Spin),
        "2" | "b" | "buy" if !vowels_left => Err(GameError::InvalidInput(
            "Every vowel has been called".to_string(),
        )),
        "2" | "b" | "buy" if balance < VOWEL_COST => Err(GameError::InsufficientFunds {
            balance,
            cost: VOWEL_COST,
        }),
        "2" | "b" | "buy" => Ok(TurnChoice::BuyVowel),
        "3" | "o" | "solve" => Ok(TurnChoice::Solve),
        other => Err(GameError::InvalidInput(format!(
            "'{other}' is not a choice, pick 1, 2 or 3"
        ))),
    }
}

/// Parse a consonant called after a spin
///
/// # Errors
/// `InvalidInput` for anything but a single consonant, `DuplicateGuess` if
/// the letter has been called before.
pub fn parse_consonant(line: &str, guessed: &GuessRecord) -> Result<Letter, GameError> {
    let letter = Letter::parse(line)?;
    if letter.is_vowel() {
        return Err(GameError::InvalidInput(format!(
            "'{letter}' is a vowel, vowels must be bought"
        )));
    }
    unguessed(letter, guessed)
}

/// Parse a vowel to buy
///
/// # Errors
/// `InvalidInput` for anything but a single vowel, `DuplicateGuess` if the
/// vowel has been called before.
pub fn parse_vowel(line: &str, guessed: &GuessRecord) -> Result<Letter, GameError> {
    let letter = Letter::parse(line)?;
    if letter.is_consonant() {
        return Err(GameError::InvalidInput(format!(
            "'{letter}' is not a vowel (A, E, I, O, U)"
        )));
    }
    unguessed(letter, guessed)
}

/// Parse a solve attempt; any non-blank text is a valid attempt
///
/// # Errors
/// `InvalidInput` for blank input.
pub fn parse_solve(line: &str) -> Result<String, GameError> {
    let attempt = line.trim();
    if attempt.is_empty() {
        return Err(GameError::InvalidInput("Type the whole phrase".to_string()));
    }
    Ok(attempt.to_ascii_uppercase())
}

fn unguessed(letter: Letter, guessed: &GuessRecord) -> Result<Letter, GameError> {
    if guessed.contains(letter) {
        Err(GameError::DuplicateGuess(letter))
    } else {
        Ok(letter)
    }
}

/// Prompt until `parse` accepts a line
pub(crate) fn ask<T>(
    input: &mut dyn HumanInput,
    prompt: &str,
    mut parse: impl FnMut(&str) -> Result<T, GameError>,
) -> Result<T, GameError> {
    loop {
        let line = input.read_line(prompt).ok_or(GameError::InputClosed)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::debug!("rejected input {line:?}: {e}");
                input.reject(&e.to_string());
            }
        }
    }
}

/// Pre-recorded answers, for tests and replays
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    rejections: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every prompt shown so far
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every rejection message shown so far
    #[must_use]
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Lines not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl HumanInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front()
    }

    fn reject(&mut self, reason: &str) {
        self.rejections.push(reason.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(b: u8) -> Letter {
        Letter::new(b).unwrap()
    }

    #[test]
    fn choice_accepts_numbers_and_initials() {
        assert_eq!(parse_choice("1", 0, false), Ok(TurnChoice::Spin));
        assert_eq!(parse_choice(" S ", 0, false), Ok(TurnChoice::Spin));
        assert_eq!(parse_choice("b", 300, true), Ok(TurnChoice::BuyVowel));
        assert_eq!(parse_choice("2", 250, true), Ok(TurnChoice::BuyVowel));
        assert_eq!(parse_choice("o", 0, false), Ok(TurnChoice::Solve));
        assert_eq!(parse_choice("3", 0, true), Ok(TurnChoice::Solve));
    }

    #[test]
    fn choice_rejects_unaffordable_vowel() {
        assert_eq!(
            parse_choice("2", 100, true),
            Err(GameError::InsufficientFunds {
                balance: 100,
                cost: 250
            })
        );
        assert!(matches!(
            parse_choice("9", 0, true),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn choice_rejects_vowel_when_none_are_left() {
        assert_eq!(
            parse_choice("2", 5000, false),
            Err(GameError::InvalidInput(
                "Every vowel has been called".to_string()
            ))
        );
    }

    #[test]
    fn menu_hides_vowel_when_unaffordable() {
        assert!(choice_prompt(true).contains("Buy Vowel"));
        assert!(!choice_prompt(false).contains("Buy Vowel"));
    }

    #[test]
    fn consonant_validation() {
        let guessed: GuessRecord = [letter(b'T')].into_iter().collect();
        assert_eq!(parse_consonant("r", &guessed), Ok(letter(b'R')));
        assert!(matches!(
            parse_consonant("a", &guessed),
            Err(GameError::InvalidInput(_))
        ));
        assert_eq!(
            parse_consonant("t", &guessed),
            Err(GameError::DuplicateGuess(letter(b'T')))
        );
        assert!(parse_consonant("rs", &guessed).is_err());
        assert!(parse_consonant("", &guessed).is_err());
    }

    #[test]
    fn vowel_validation() {
        let guessed: GuessRecord = [letter(b'E')].into_iter().collect();
        assert_eq!(parse_vowel(" o ", &guessed), Ok(letter(b'O')));
        assert!(matches!(
            parse_vowel("r", &guessed),
            Err(GameError::InvalidInput(_))
        ));
        assert_eq!(
            parse_vowel("E", &guessed),
            Err(GameError::DuplicateGuess(letter(b'E')))
        );
    }

    #[test]
    fn solve_requires_text() {
        assert_eq!(parse_solve(" cat "), Ok("CAT".to_string()));
        assert!(parse_solve("   ").is_err());
    }

    #[test]
    fn ask_reprompts_until_valid() {
        let mut input = ScriptedInput::new(["7", "a", "r"]);
        let guessed = GuessRecord::new();
        let called = ask(&mut input, "Consonant", |line| parse_consonant(line, &guessed));
        assert_eq!(called, Ok(Letter::new(b'R').unwrap()));
        assert_eq!(input.prompts().len(), 3);
        assert_eq!(input.rejections().len(), 2);
    }

    #[test]
    fn ask_fails_when_input_runs_out() {
        let mut input = ScriptedInput::new(["a"]);
        let guessed = GuessRecord::new();
        let result = ask(&mut input, "Consonant", |line| parse_consonant(line, &guessed));
        assert_eq!(result, Err(GameError::InputClosed));
    }
}
