//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;

pub use analyze::{AnalysisResult, StrategyChoice, analyze_board};
pub use benchmark::{BenchmarkResult, SeatStats, run_benchmark};
pub use play::{StdinInput, run_play};

use crate::core::Letter;
use crate::game::{PLAYER_COUNT, PlayerKind};
use crate::strategy::StrategyType;
use log::warn;

/// Seats used when the player list is missing or the wrong length
pub const DEFAULT_PLAYERS: [&str; PLAYER_COUNT] = ["human", "smart", "conservative"];

/// Resolve player tags into seats
///
/// N-gram contestants use `bigrams` in place of the built-in table unless it
/// is empty.
#[must_use]
pub fn resolve_players(tags: &[String], bigrams: &[[Letter; 2]]) -> Vec<PlayerKind> {
    let tags: Vec<&str> = if tags.len() == PLAYER_COUNT {
        tags.iter().map(String::as_str).collect()
    } else {
        if !tags.is_empty() {
            warn!(
                "Expected {PLAYER_COUNT} players, got {}; using {}",
                tags.len(),
                DEFAULT_PLAYERS.join(" ")
            );
        }
        DEFAULT_PLAYERS.to_vec()
    };

    tags.into_iter()
        .map(|tag| match PlayerKind::from_name(tag) {
            PlayerKind::Computer(StrategyType::NGram(strategy)) if !bigrams.is_empty() => {
                PlayerKind::Computer(
                    StrategyType::NGram(strategy.with_bigrams(bigrams.to_vec())),
                )
            }
            other => other,
        })
        .collect()
}
