//! Interactive console game
//!
//! One puzzle, three seats, narrated on stdout. Human seats type their answers
//! at the terminal.

use crate::core::{GameError, Wheel};
use crate::game::{GameConfig, GameSummary, HumanInput, LogObserver, PlayerKind, TurnScheduler};
use crate::output::ConsoleNarrator;
use crate::puzzles::PuzzleBook;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Reads human answers from the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinInput;

impl HumanInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}: ", prompt.bright_white().bold());
        io::stdout().flush().ok()?;

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn reject(&mut self, reason: &str) {
        println!("  {}", reason.red());
    }
}

/// Play one narrated game on the console
///
/// # Errors
/// Returns `GameError::InputClosed` if stdin closes while a human is due to
/// answer.
pub fn run_play(
    players: Vec<PlayerKind>,
    book: &PuzzleBook,
    config: GameConfig,
) -> Result<GameSummary, GameError> {
    let mut rng = config.rng();
    let puzzle = book.random(&mut rng).clone();
    let narrator = ConsoleNarrator::new(config.pause);

    let mut input = StdinInput;
    let mut game = TurnScheduler::new(&puzzle, players, Wheel::standard(), rng, config)?
        .with_input(&mut input)
        .with_observer(narrator)
        .with_observer(LogObserver);

    game.play()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computer_only_game_runs_to_completion() {
        let players = ["smart", "morse", "trigram"]
            .into_iter()
            .map(PlayerKind::from_name)
            .collect();
        let summary = run_play(players, &PuzzleBook::embedded(), GameConfig::new(Some(5))).unwrap();
        assert_eq!(summary.winnings.len(), 3);
        assert!(summary.turns > 0);
    }

    #[test]
    fn same_seed_same_game() {
        let play = || {
            let players = ["oxford", "conservative", "alphabetical"]
                .into_iter()
                .map(PlayerKind::from_name)
                .collect();
            run_play(players, &PuzzleBook::embedded(), GameConfig::new(Some(11))).unwrap()
        };
        assert_eq!(play(), play());
    }
}
