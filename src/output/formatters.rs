//! Formatting utilities for terminal output

use crate::core::{EvaluatedTile, LetterStatus};
use crate::game::{Game, GameOutcome};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Tile background colors as RGB
#[must_use]
pub const fn status_rgb(status: LetterStatus) -> (u8, u8, u8) {
    match status {
        LetterStatus::Correct => (0x53, 0x8d, 0x4e),
        LetterStatus::Present => (0xb5, 0x9f, 0x3b),
        LetterStatus::Absent => (0x3a, 0x3a, 0x3c),
        LetterStatus::Unknown => (0x81, 0x83, 0x84),
    }
}

/// Letter shown in a tile, `_` for a blank
#[must_use]
pub fn tile_char(tile: &EvaluatedTile) -> char {
    tile.letter.map_or('_', |c| c.to_ascii_uppercase())
}

/// Shareable result: a score line followed by one emoji row per submitted attempt
///
/// ```text
/// wordle_board 2/6
/// 🟩🟩⬛🟩🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_grid(game: &Game) -> String {
    let max = game.rules().max_attempts();
    let score = match game.outcome() {
        GameOutcome::Won => game.active_index().to_string(),
        GameOutcome::Lost => "X".to_string(),
        GameOutcome::InProgress => "-".to_string(),
    };

    let mut out = format!("wordle_board {score}/{max}");
    for row in game.submitted() {
        out.push('\n');
        out.push_str(&row.to_emoji());
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
