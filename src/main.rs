//! Wheel of Fortune - CLI
//!
//! Play against computer contestants, benchmark strategies against each other
//! or ask every strategy what it would do from a given board.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use std::path::PathBuf;
use std::time::Duration;
use wheel_of_fortune::{
    commands::{analyze_board, resolve_players, run_benchmark, run_play},
    core::GameError,
    game::{GameConfig, PlayerKind},
    output::{print_analysis_result, print_benchmark_result, print_game_summary},
    puzzles::PuzzleBook,
    strategy::tables::bigrams_or_builtin,
};

const BENCHMARK_PLAYERS: [&str; 3] = ["smart", "conservative", "trigram"];

#[derive(Parser)]
#[command(
    name = "wheel_of_fortune",
    about = "Wheel of Fortune with frequency-driven computer contestants",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the wheel and puzzle draw (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Puzzle list, CSV rows of phrase,category[,date,game_type]
    #[arg(long, global = true)]
    puzzles: Option<PathBuf>,

    /// Ranked bigram list, one bigram per line
    #[arg(long, global = true)]
    bigrams: Option<PathBuf>,

    /// Log game events
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the console (default)
    Play {
        /// Three player types: human, alphabetical, morse, oxford, smart,
        /// aggressive, conservative, trigram
        players: Vec<String>,

        /// Milliseconds to pause after each computer turn
        #[arg(long, default_value = "600")]
        pause_ms: u64,
    },

    /// Play computer-only games and compare the seats
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Three computer player types (default: smart conservative trigram)
        players: Vec<String>,
    },

    /// Show what every strategy would do on a board
    Analyze {
        /// Board with _ for hidden letters, e.g. "TH_ C_T"
        #[arg(short, long)]
        board: String,

        /// Letters already called
        #[arg(short, long, default_value = "")]
        guessed: String,

        /// Balance of the player to move
        #[arg(long, default_value = "0")]
        balance: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(default_level)
        .parse_default_env()
        .format_target(false)
        .init();

    let bigrams = bigrams_or_builtin(cli.bigrams.as_deref());
    let book = PuzzleBook::load_or_embedded(cli.puzzles.as_deref());
    info!("{} puzzles, {} bigrams", book.len(), bigrams.len());

    let command = cli.command.unwrap_or(Commands::Play {
        players: Vec::new(),
        pause_ms: 600,
    });

    match command {
        Commands::Play { players, pause_ms } => {
            let players = resolve_players(&players, &bigrams);
            let config = GameConfig {
                pause: Duration::from_millis(pause_ms),
                ..GameConfig::new(cli.seed)
            };
            run_play_command(players, &book, config)
        }
        Commands::Benchmark { count, players } => {
            let players = if players.is_empty() {
                BENCHMARK_PLAYERS.map(String::from).to_vec()
            } else {
                players
            };
            let players = resolve_players(&players, &bigrams);
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("Running {count} games with base seed {seed}...");
            let result = run_benchmark(&players, &book, count, seed, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Analyze {
            board,
            guessed,
            balance,
        } => {
            let result = analyze_board(&board, &guessed, balance, &bigrams)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(players: Vec<PlayerKind>, book: &PuzzleBook, config: GameConfig) -> Result<()> {
    let names: Vec<&'static str> = players.iter().map(PlayerKind::name).collect();
    match run_play(players, book, config) {
        Ok(summary) => {
            print_game_summary(&summary, &names);
            Ok(())
        }
        Err(GameError::InputClosed) => {
            println!("\n👋 Thanks for playing!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
