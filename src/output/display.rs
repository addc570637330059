//! Display functions for command results

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, share_grid, status_rgb, tile_char};
use crate::commands::{BatchResult, ReplayEvent, ReplayResult, ScoreResult};
use crate::core::{EvaluatedTile, KeyboardKnowledge, LetterStatus};
use crate::game::{Game, GameOutcome, RowState, Statistics};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Colored " X " cell; only completed rows get a background
fn paint_tile(tile: &EvaluatedTile, revealed: bool) -> ColoredString {
    let cell = format!(" {} ", tile_char(tile));
    if revealed {
        let (r, g, b) = status_rgb(tile.status);
        cell.bold().white().on_truecolor(r, g, b)
    } else {
        cell.bold()
    }
}

fn paint_key(letter: char, status: LetterStatus) -> ColoredString {
    let (r, g, b) = status_rgb(status);
    format!(" {letter} ").white().on_truecolor(r, g, b)
}

/// Write the board, one line per row
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_board<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    for row in game.rows() {
        let revealed = row.state == RowState::Completed;
        let cells: Vec<String> = row
            .tiles
            .iter()
            .map(|tile| paint_tile(tile, revealed).to_string())
            .collect();
        let marker = if row.state == RowState::Active { "›" } else { " " };
        writeln!(out, "  {marker} {}", cells.join(" "))?;
    }
    Ok(())
}

/// Write the keyboard in QWERTY layout
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardKnowledge) -> io::Result<()> {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| paint_key(letter, keyboard.get(letter)).to_string())
            .collect();
        writeln!(out, "  {}{}", " ".repeat(indent * 2), keys.join(""))?;
    }
    Ok(())
}

/// Write the end-of-game banner and share grid
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_outcome<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    match game.outcome() {
        GameOutcome::InProgress => return Ok(()),
        GameOutcome::Won => {
            let n = game.active_index();
            let banner = format!(
                "🎉 Solved in {n} {}!",
                if n == 1 { "guess" } else { "guesses" }
            );
            writeln!(out, "\n{}", banner.green().bold())?;
        }
        GameOutcome::Lost => {
            let banner = format!("❌ Out of attempts. The word was {}", game.secret());
            writeln!(out, "\n{}", banner.red().bold())?;
        }
    }
    writeln!(out, "\n{}\n", share_grid(game))
}

/// Write session statistics with a distribution bar per attempt number
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_statistics<W: Write>(
    out: &mut W,
    stats: &Statistics,
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )?;
    let peak = stats
        .distribution(max_attempts)
        .map(|(_, wins)| wins)
        .max()
        .unwrap_or(0);
    for (n, wins) in stats.distribution(max_attempts) {
        let bar = create_progress_bar(wins as f64, peak as f64, 30);
        writeln!(out, "  {n:>2}: {} {wins}", bar.green())?;
    }
    Ok(())
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    let cells: Vec<String> = result
        .feedback
        .iter()
        .map(|tile| paint_tile(tile, true).to_string())
        .collect();
    println!("\n  {}", cells.join(" "));
    println!("  {}", result.feedback.to_emoji());
    println!(
        "\n  {} correct, {} present, {} absent",
        result.feedback.count(LetterStatus::Correct),
        result.feedback.count(LetterStatus::Present),
        result.feedback.count(LetterStatus::Absent)
    );
}

/// Print a replayed game
///
/// # Errors
/// Returns any I/O error from stdout.
pub fn print_replay_result(result: &ReplayResult) -> io::Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    for step in &result.steps {
        match &step.event {
            ReplayEvent::Submitted(feedback) => {
                writeln!(out, "  {:<8} {feedback}", step.guess.to_uppercase())?;
            }
            ReplayEvent::Rejected(err) => {
                writeln!(
                    out,
                    "  {:<8} {}",
                    step.guess.to_uppercase(),
                    format!("rejected: {err}").yellow()
                )?;
            }
            ReplayEvent::Ignored => {
                writeln!(
                    out,
                    "  {:<8} {}",
                    step.guess.to_uppercase(),
                    "ignored: game is over".bright_black()
                )?;
            }
        }
    }
    writeln!(out, "{}\n", "─".repeat(40).cyan())?;

    write_board(&mut out, &result.game)?;
    writeln!(out)?;
    write_keyboard(&mut out, &result.game.keyboard())?;

    if result.game.outcome() == GameOutcome::InProgress {
        writeln!(
            out,
            "\n{} attempts left",
            result.game.rules().max_attempts() - result.game.active_index()
        )?;
    }
    write_outcome(&mut out, &result.game)
}

/// Print the result of a batch run
///
/// # Errors
/// Returns any I/O error from stdout.
pub fn print_batch_result(result: &BatchResult) -> io::Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BATCH RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let unfinished = result
        .games
        .iter()
        .filter(|g| g.outcome == GameOutcome::InProgress)
        .count();
    writeln!(out, "\n  Games:       {}", result.games.len())?;
    writeln!(out, "  Unfinished:  {unfinished}")?;
    writeln!(out, "  Time taken:  {:.2}s\n", result.duration.as_secs_f64())?;

    write_statistics(&mut out, &result.stats, result.max_attempts)?;

    if !result.errors.is_empty() {
        writeln!(out, "\n{}", "Skipped lines:".yellow().bold())?;
        for (line_no, err) in &result.errors {
            writeln!(out, "  line {line_no}: {err}")?;
        }
    }
    Ok(())
}
