//! Puzzle list loading
//!
//! Rows look like `phrase,category[,date,game_type]`. The date is ignored.
//! Rows that don't hold a playable phrase are skipped.

use super::Puzzle;
use crate::core::GameError;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse one CSV row
///
/// # Errors
/// Returns `GameError::InvalidInput` for rows without a category or with a
/// phrase the board can't show.
///
/// # Examples
/// ```
/// use wheel_of_fortune::puzzles::loader::parse_row;
///
/// let puzzle = parse_row("salt &amp; pepper,Things,2024-01-05,THING").unwrap();
/// assert_eq!(puzzle.phrase().text(), "SALT & PEPPER");
/// assert_eq!(puzzle.category(), "Things");
/// assert_eq!(puzzle.game_type(), Some("THING"));
/// ```
pub fn parse_row(row: &str) -> Result<Puzzle, GameError> {
    let mut fields = row.split(',');
    let phrase = fields.next().unwrap_or_default().replace("&amp;", "&");
    let category = fields
        .next()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| GameError::InvalidInput(format!("Row has no category: {row:?}")))?;

    let game_type = fields.nth(1).unwrap_or_default();

    Ok(Puzzle::new(&phrase, category)?.with_game_type(game_type))
}

/// Parse every playable row, skipping the rest
#[must_use]
pub fn puzzles_from_rows<'a>(rows: impl IntoIterator<Item = &'a str>) -> Vec<Puzzle> {
    rows.into_iter()
        .map(str::trim)
        .filter(|row| !row.is_empty() && !row.starts_with('#'))
        .filter_map(|row| {
            parse_row(row)
                .inspect_err(|e| debug!("Skipping puzzle row: {e}"))
                .ok()
        })
        .collect()
}

/// Load puzzles from a CSV file
///
/// # Errors
/// Returns `GameError::ResourceUnavailable` if the file cannot be read or has
/// no playable rows.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        GameError::ResourceUnavailable(format!("puzzle list {}: {e}", path.display()))
    })?;

    let puzzles = puzzles_from_rows(content.lines());
    if puzzles.is_empty() {
        return Err(GameError::ResourceUnavailable(format!(
            "puzzle list {} has no playable puzzles",
            path.display()
        )));
    }
    Ok(puzzles)
}
