//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one guess per line.

use super::replay::{ReplayEvent, play_line};
use crate::config::GameConfig;
use crate::game::{GameOutcome, Statistics};
use crate::output::{write_board, write_keyboard, write_outcome, write_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the simple interactive mode over any line source
///
/// Lines starting with `:` are commands (`:new`, `:quit`); anything else is a
/// guess. Returns the session statistics when input ends or the player quits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    config: &GameConfig,
    input: R,
    mut out: W,
) -> Result<Statistics> {
    let mut game = config.new_game();
    let mut stats = Statistics::default();
    let max = config.rules().max_attempts();

    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║          Word Puzzle - Simple Mode       ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {max} tries. Commands: ':new', ':quit'\n",
        config.rules().word_length()
    )?;
    write_prompt(&mut out, game.active_index() + 1, max)?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        debug!(input = trimmed, "line received");

        if game.outcome().is_terminal() {
            if matches!(trimmed.to_lowercase().as_str(), "" | "y" | "yes") {
                game.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                write_prompt(&mut out, 1, max)?;
                continue;
            }
            break;
        }

        match trimmed {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                game.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            guess => match play_line(&mut game, guess) {
                ReplayEvent::Rejected(err) => {
                    writeln!(out, "{}", format!("✗ {err}").yellow())?;
                }
                ReplayEvent::Submitted(_) | ReplayEvent::Ignored => {
                    writeln!(out)?;
                    write_board(&mut out, &game)?;
                    writeln!(out)?;
                    write_keyboard(&mut out, &game.keyboard())?;
                }
            },
        }

        if game.outcome() == GameOutcome::InProgress {
            write_prompt(&mut out, game.active_index() + 1, max)?;
        } else {
            stats.record(&game);
            write_outcome(&mut out, &game)?;
            write_statistics(&mut out, &stats, max)?;
            write!(out, "\nPlay again? (yes/no): ")?;
            out.flush()?;
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn write_prompt<W: Write>(out: &mut W, turn: usize, max: usize) -> Result<()> {
    write!(out, "Guess {turn}/{max}: ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Statistics, String) {
        let mut out = Vec::new();
        let stats = run_simple(&GameConfig::default(), input.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_then_quit() {
        let (stats, out) = run("plane\npline\nno\n");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!(out.contains("Solved in 2 guesses"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn short_guess_is_reported() {
        let (stats, out) = run("pla\n:quit\n");
        assert_eq!(stats.total_games, 0);
        assert!(out.contains("not enough letters"));
    }

    #[test]
    fn play_again_keeps_statistics() {
        let input = "pline\nyes\ncrane\ncrane\ncrane\ncrane\ncrane\ncrane\nno\n";
        let (stats, out) = run(input);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert!(out.contains("The word was PLINE"));
    }

    #[test]
    fn new_command_resets_board() {
        let (stats, out) = run("crane\n:new\npline\nno\n");
        assert_eq!(stats.guess_distribution[1], 1);
        assert!(out.contains("New game started"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (stats, _) = run("crane\n");
        assert_eq!(stats, Statistics::default());
    }
}
