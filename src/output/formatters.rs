//! Formatting utilities for terminal output

use crate::core::{Board, Letter, PLACEHOLDER};

/// Spread a board out one cell per column, e.g. `C _ T   _ _ G`
#[must_use]
pub fn spaced_board(board: &Board) -> String {
    board
        .words()
        .map(|word| {
            word.iter()
                .map(|&c| char::from(c).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Dollar amount with thousands separators
#[must_use]
pub fn money(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Comma separated letters in guess order
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "none".to_string();
    }
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Share of the board that is showing, from 0.0 to 1.0
#[must_use]
pub fn revealed_fraction(board: &Board) -> f64 {
    let letters = board
        .cells()
        .iter()
        .filter(|&&c| c == PLACEHOLDER || c.is_ascii_uppercase())
        .count();
    if letters == 0 {
        return 1.0;
    }
    (letters - board.hidden_count()) as f64 / letters as f64
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_board_separates_cells_and_words() {
        let board = Board::from_mask("C_T D_G").unwrap();
        assert_eq!(spaced_board(&board), "C _ T   D _ G");
    }

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0), "$0");
        assert_eq!(money(950), "$950");
        assert_eq!(money(1250), "$1,250");
        assert_eq!(money(1_000_000), "$1,000,000");
    }

    #[test]
    fn letter_list_formats() {
        let letters = [Letter::new(b'r').unwrap(), Letter::new(b's').unwrap()];
        assert_eq!(letter_list(&letters), "R, S");
        assert_eq!(letter_list(&[]), "none");
    }

    #[test]
    fn revealed_fraction_ignores_punctuation() {
        let board = Board::from_mask("C_T'S").unwrap();
        assert!((revealed_fraction(&board) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
