//! Batch command
//!
//! Plays many recorded games in parallel. Each non-empty line of the input is
//! `SECRET GUESS GUESS ...`; lines starting with `#` are comments.

use super::replay::replay_guesses;
use crate::config::GameConfig;
use crate::game::{Game, GameOutcome, Statistics};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// One game parsed from a batch line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchGame {
    pub line_no: usize,
    pub secret: String,
    pub guesses: Vec<String>,
}

/// How one batch game ended
#[derive(Debug, Clone)]
pub struct BatchGameResult {
    pub line_no: usize,
    pub secret: String,
    pub outcome: GameOutcome,
    pub attempts_used: usize,
}

/// Result of a batch run
pub struct BatchResult {
    pub games: Vec<BatchGameResult>,
    pub stats: Statistics,
    pub max_attempts: usize,
    /// `(line number, reason)` for lines that could not be played
    pub errors: Vec<(usize, String)>,
    pub duration: Duration,
}

/// Split batch text into games, skipping blanks and comments
#[must_use]
pub fn parse_batch(text: &str) -> Vec<BatchGame> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let mut words = line.split_whitespace().map(str::to_string);
            let secret = words.next()?;
            Some(BatchGame {
                line_no: i + 1,
                secret,
                guesses: words.collect(),
            })
        })
        .collect()
}

/// Read a batch file and play it
///
/// # Errors
///
/// Returns an error if the file cannot be read or the progress bar template
/// is rejected.
pub fn run_batch_file<P: AsRef<Path>>(config: &GameConfig, path: P) -> Result<BatchResult> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    run_batch(config, &parse_batch(&text), true)
}

/// Play every game in parallel, one `Game` per task
///
/// Secrets that do not fit the configured ruleset are reported in
/// `errors` instead of aborting the run.
///
/// # Errors
///
/// Returns an error if the progress bar template is rejected.
pub fn run_batch(config: &GameConfig, games: &[BatchGame], progress: bool) -> Result<BatchResult> {
    let start = Instant::now();

    let pb = if progress {
        ProgressBar::new(games.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let played: Vec<Result<(BatchGameResult, Game), (usize, String)>> = games
        .par_iter()
        .map(|batch| {
            let outcome = play_one(config, batch);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut results = Vec::with_capacity(played.len());
    let mut errors = Vec::new();
    let mut stats = Statistics::default();

    for item in played {
        match item {
            Ok((result, game)) => {
                stats.record(&game);
                results.push(result);
            }
            Err((line_no, reason)) => {
                warn!(line_no, %reason, "batch line skipped");
                errors.push((line_no, reason));
            }
        }
    }

    info!(
        games = results.len(),
        won = stats.games_won,
        skipped = errors.len(),
        "batch complete"
    );

    Ok(BatchResult {
        games: results,
        stats,
        max_attempts: config.rules().max_attempts(),
        errors,
        duration: start.elapsed(),
    })
}

fn play_one(
    config: &GameConfig,
    batch: &BatchGame,
) -> Result<(BatchGameResult, Game), (usize, String)> {
    let secret = config
        .secret_for(&batch.secret)
        .map_err(|e| (batch.line_no, e.to_string()))?;
    let game = Game::new(config.rules(), secret).map_err(|e| (batch.line_no, e.to_string()))?;

    let replay = replay_guesses(game, &batch.guesses);
    let game = replay.game;

    Ok((
        BatchGameResult {
            line_no: batch.line_no,
            secret: game.secret().text().to_string(),
            outcome: game.outcome(),
            attempts_used: game.active_index(),
        },
        game,
    ))
}
