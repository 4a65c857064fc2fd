//! Display functions for command results

use super::formatters::{create_progress_bar, letter_list, money, revealed_fraction, spaced_board};
use crate::commands::{AnalysisResult, BenchmarkResult};
use crate::game::{GameOutcome, GameSummary};
use crate::strategy::{Action, NGramTier};
use colored::Colorize;

/// Print the final standings of a game
pub fn print_game_summary(summary: &GameSummary, names: &[&str]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "FINAL STANDINGS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nPuzzle:   {} ({})",
        summary.phrase.bright_yellow().bold(),
        summary.category
    );
    println!("Called:   {}", letter_list(&summary.guessed));
    println!("Turns:    {}", summary.turns);
    println!();

    let winner = summary.outcome.winner();
    for (seat, &amount) in summary.winnings.iter().enumerate() {
        let name = names.get(seat).copied().unwrap_or("?");
        let line = format!("   Player {} ({name:>12}): {:>10}", seat + 1, money(amount));
        if winner == Some(seat) {
            println!("{} 🏆", line.green().bold());
        } else {
            println!("{line}");
        }
    }

    match summary.outcome {
        GameOutcome::Won { .. } => {}
        GameOutcome::Unsolved => println!("\n{}", "❌ Nobody solved the puzzle".red().bold()),
        GameOutcome::Stalled => println!("\n{}", "❌ Game stopped at the turn limit".red().bold()),
    }
}

/// Print the result of board analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BOARD ANALYSIS:".bright_cyan().bold(),
        spaced_board(&result.board).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let shown = revealed_fraction(&result.board);
    println!(
        "\n   Revealed: [{}] {:.0}%",
        create_progress_bar(shown, 1.0, 30).green(),
        shown * 100.0
    );
    println!("   Called:   {}", letter_list(result.guessed.letters()));
    println!("   Balance:  {}", money(result.balance));

    println!("\n🎯 {}", "Strategy choices:".bright_cyan().bold());
    for choice in &result.choices {
        let action = match &choice.action {
            Action::Spin(letter) => format!("spin, call {letter}").normal(),
            Action::BuyVowel(letter) => format!("buy {letter}").yellow(),
            Action::Solve(text) => format!("solve {text:?}").magenta(),
        };
        let tier = match choice.tier {
            Some(NGramTier::Trigram) => " (trigram match)",
            Some(NGramTier::Bigram) => " (bigram match)",
            Some(NGramTier::Unigram) => " (letter frequency)",
            None => "",
        };
        println!("   {:>12}: {action}{}", choice.name, tier.bright_black());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Average turns:    {}",
        format!("{:.1}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Unfinished:       {}",
        if result.unfinished == 0 {
            "0".green()
        } else {
            result.unfinished.to_string().yellow()
        }
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n🏆 {}", "Seats:".bright_cyan().bold());
    for (seat, stats) in result.seats.iter().enumerate() {
        let pct = if result.games == 0 {
            0.0
        } else {
            stats.wins as f64 / result.games as f64 * 100.0
        };
        println!(
            "   {} {:>12}: {} {:4} wins ({pct:5.1}%), avg {}",
            seat + 1,
            stats.name,
            create_progress_bar(pct, 100.0, 30).green(),
            stats.wins,
            money(stats.average_winnings.round() as u32)
        );
    }
}
