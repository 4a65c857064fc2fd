//! Console narration of a running game

use super::formatters::{letter_list, money, spaced_board};
use crate::core::Outcome;
use crate::game::{GameEvent, GameObserver, GameOutcome};
use colored::Colorize;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Prints every game event for a person watching at the terminal
#[derive(Debug, Clone, Default)]
pub struct ConsoleNarrator {
    /// Delay after each computer turn so the game can be followed
    pause: Duration,
}

impl ConsoleNarrator {
    #[must_use]
    pub const fn new(pause: Duration) -> Self {
        Self { pause }
    }

    fn seat(player: usize) -> String {
        format!("Player {}", player + 1)
    }
}

impl GameObserver for ConsoleNarrator {
    fn on_event(&mut self, event: &GameEvent<'_>) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        match event {
            GameEvent::GameStart {
                category,
                game_type,
                board,
            } => {
                writeln!(out, "\n{}", "═".repeat(60).cyan())?;
                writeln!(out, " {} ", "WHEEL OF FORTUNE".bright_cyan().bold())?;
                writeln!(out, "{}", "═".repeat(60).cyan())?;
                if let Some(game_type) = game_type {
                    writeln!(out, "Game type: {}", game_type.bright_magenta())?;
                }
                writeln!(out, "Category: {}", category.bright_yellow().bold())?;
                writeln!(out, "\n   {}\n", spaced_board(board).bold())?;
            }
            GameEvent::TurnStart {
                player,
                kind,
                winnings,
            } => {
                writeln!(
                    out,
                    "{} {} ({kind}), winnings {}",
                    "▶".cyan(),
                    Self::seat(*player).bold(),
                    money(winnings[*player])
                )?;
                if *kind != "human" && !self.pause.is_zero() {
                    out.flush()?;
                    thread::sleep(self.pause);
                }
            }
            GameEvent::WheelResult { outcome, .. } => {
                let text = match outcome {
                    Outcome::Bankrupt => "BANKRUPT!".red().bold(),
                    Outcome::LoseTurn => "LOSE A TURN".yellow().bold(),
                    Outcome::Cash(_) => outcome.to_string().green().bold(),
                };
                writeln!(out, "  🎡 The wheel lands on {text}")?;
            }
            GameEvent::GuessResult {
                letter,
                count,
                reward,
                ..
            } => {
                if *count == 0 {
                    writeln!(out, "  ❌ No {letter}'s in the puzzle")?;
                } else if *reward > 0 {
                    let earned = reward.saturating_mul(*count as u32);
                    writeln!(
                        out,
                        "  ✅ {count} {letter}'s, earning {}",
                        money(earned).green()
                    )?;
                } else {
                    writeln!(out, "  ✅ {count} {letter}'s")?;
                }
            }
            GameEvent::VowelPurchase { letter, player, .. } => {
                writeln!(
                    out,
                    "  💰 {} buys {letter}",
                    Self::seat(*player)
                )?;
            }
            GameEvent::SolveAttempt {
                text,
                correct,
                player,
                ..
            } => {
                if *correct {
                    writeln!(
                        out,
                        "  🏆 {} solves it: {}",
                        Self::seat(*player),
                        text.green().bold()
                    )?;
                } else {
                    writeln!(out, "  ❌ {} guesses {text:?}, not quite", Self::seat(*player))?;
                }
            }
            GameEvent::PuzzleProgress { board, guessed } => {
                writeln!(out, "\n   {}", spaced_board(board).bold())?;
                writeln!(
                    out,
                    "   Called: {}\n",
                    letter_list(guessed.letters()).bright_black()
                )?;
            }
            GameEvent::RoundComplete { player } => {
                writeln!(
                    out,
                    "{}",
                    format!("Every letter is showing! {} may solve.", Self::seat(*player))
                        .bright_cyan()
                )?;
            }
            GameEvent::GameOver { outcome, .. } => match outcome {
                GameOutcome::Won { player, winnings } => writeln!(
                    out,
                    "\n{}",
                    format!("🏆 {} wins with {}!", Self::seat(*player), money(*winnings))
                        .green()
                        .bold()
                )?,
                GameOutcome::Unsolved => {
                    writeln!(out, "\n{}", "Nobody could solve the puzzle.".red().bold())?;
                }
                GameOutcome::Stalled => {
                    writeln!(out, "\n{}", "The game ran out of turns.".red().bold())?;
                }
            },
        }
        Ok(())
    }
}
