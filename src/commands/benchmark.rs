//! Benchmark command
//!
//! Plays many computer-only games in parallel and compares the seats.

use crate::core::{GameError, Wheel};
use crate::game::{GameConfig, GameOutcome, GameSummary, PLAYER_COUNT, PlayerKind, TurnScheduler};
use crate::puzzles::PuzzleBook;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Results for one seat across every game
#[derive(Debug, Clone, PartialEq)]
pub struct SeatStats {
    pub name: &'static str,
    pub wins: usize,
    /// Winnings kept in games this seat won
    pub total_winnings: u64,
    pub average_winnings: f64,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub games: usize,
    pub seats: Vec<SeatStats>,
    /// Games that ended unsolved or stalled
    pub unfinished: usize,
    pub average_turns: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` games between computer seats
///
/// Game `i` is seeded with `base_seed + i`, so a run is reproducible no matter
/// how rayon schedules it.
///
/// # Errors
/// Returns `GameError::InvalidInput` if a seat is human or the seat count is
/// wrong.
pub fn run_benchmark(
    players: &[PlayerKind],
    book: &PuzzleBook,
    count: usize,
    base_seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    if players.iter().any(PlayerKind::is_human) {
        return Err(GameError::InvalidInput(
            "Benchmarks are computer-only".to_string(),
        ));
    }
    if players.len() != PLAYER_COUNT {
        return Err(GameError::InvalidInput(format!(
            "A game needs {PLAYER_COUNT} players, got {}",
            players.len()
        )));
    }

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let summaries: Vec<GameSummary> = (0..count)
        .into_par_iter()
        .map(|i| {
            let summary = play_one(players, book, base_seed.wrapping_add(i as u64));
            pb.inc(1);
            summary
        })
        .collect::<Result<_, _>>()?;
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    Ok(tally(players, &summaries, duration))
}

fn play_one(players: &[PlayerKind], book: &PuzzleBook, seed: u64) -> Result<GameSummary, GameError> {
    let config = GameConfig::new(Some(seed));
    let mut rng = config.rng();
    let puzzle = book.random(&mut rng);
    TurnScheduler::new(puzzle, players.to_vec(), Wheel::standard(), rng, config)?
    .play()
}

fn tally(players: &[PlayerKind], summaries: &[GameSummary], duration: Duration) -> BenchmarkResult {
    let games = summaries.len();

    let seats = players
        .iter()
        .enumerate()
        .map(|(seat, player)| {
            let won: Vec<u32> = summaries
                .iter()
                .filter_map(|s| match s.outcome {
                    GameOutcome::Won { player, winnings } if player == seat => Some(winnings),
                    _ => None,
                })
                .collect();
            let total_winnings: u64 = won.iter().map(|&w| u64::from(w)).sum();
            SeatStats {
                name: player.name(),
                wins: won.len(),
                total_winnings,
                average_winnings: if games == 0 {
                    0.0
                } else {
                    total_winnings as f64 / games as f64
                },
            }
        })
        .collect();

    let unfinished = summaries
        .iter()
        .filter(|s| s.outcome.winner().is_none())
        .count();
    let total_turns: usize = summaries.iter().map(|s| s.turns).sum();

    BenchmarkResult {
        games,
        seats,
        unfinished,
        average_turns: if games == 0 {
            0.0
        } else {
            total_turns as f64 / games as f64
        },
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(names: &[&str]) -> Vec<PlayerKind> {
        names.iter().map(|n| PlayerKind::from_name(n)).collect()
    }

    #[test]
    fn benchmark_runs() {
        let players = seats(&["smart", "trigram", "conservative"]);
        let result = run_benchmark(&players, &PuzzleBook::embedded(), 12, 7, false).unwrap();

        assert_eq!(result.games, 12);
        assert_eq!(result.seats.len(), 3);
        assert!(result.average_turns >= 1.0);
    }

    #[test]
    fn wins_and_unfinished_sum_to_games() {
        let players = seats(&["morse", "oxford", "alphabetical"]);
        let result = run_benchmark(&players, &PuzzleBook::embedded(), 10, 0, false).unwrap();

        let wins: usize = result.seats.iter().map(|s| s.wins).sum();
        assert_eq!(wins + result.unfinished, result.games);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let players = seats(&["smart", "morse", "trigram"]);
        let book = PuzzleBook::embedded();
        let a = run_benchmark(&players, &book, 8, 99, false).unwrap();
        let b = run_benchmark(&players, &book, 8, 99, false).unwrap();
        assert_eq!(a.seats, b.seats);
        assert!((a.average_turns - b.average_turns).abs() < f64::EPSILON);
    }

    #[test]
    fn each_game_uses_one_seeded_stream() {
        let players = seats(&["smart", "morse", "trigram"]);
        let book = PuzzleBook::embedded();

        let mut rng = GameConfig::new(Some(21)).rng();
        let puzzle = book.random(&mut rng).clone();
        let expected = TurnScheduler::new(
            &puzzle,
            players.clone(),
            Wheel::standard(),
            rng,
            GameConfig::default(),
        )
        .unwrap()
        .play()
        .unwrap();

        assert_eq!(play_one(&players, &book, 21).unwrap(), expected);
    }

    #[test]
    fn benchmark_rejects_humans() {
        let players = seats(&["human", "smart", "smart"]);
        assert!(matches!(
            run_benchmark(&players, &PuzzleBook::embedded(), 1, 0, false),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn benchmark_empty_run() {
        let players = seats(&["smart", "smart", "smart"]);
        let result = run_benchmark(&players, &PuzzleBook::embedded(), 0, 0, false).unwrap();
        assert_eq!(result.games, 0);
        assert_eq!(result.unfinished, 0);
        assert!(result.seats.iter().all(|s| s.wins == 0));
    }
}
