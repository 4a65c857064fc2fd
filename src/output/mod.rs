//! Terminal output formatting
//!
//! Display utilities for command results and the live game narrator.

pub mod display;
pub mod formatters;
mod narrator;

pub use display::{print_analysis_result, print_benchmark_result, print_game_summary};
pub use narrator::ConsoleNarrator;
