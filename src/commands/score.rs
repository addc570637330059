//! Score a single guess against the secret

use crate::config::GameConfig;
use crate::core::{Attempt, Feedback, evaluate};
use anyhow::{Result, ensure};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: String,
    pub feedback: Feedback,
}

/// Evaluate `guess` against the configured secret
///
/// # Errors
///
/// Returns an error if the guess is not exactly `word_length` ASCII letters.
pub fn score_guess(config: &GameConfig, guess: &str) -> Result<ScoreResult> {
    let guess = guess.trim();
    let expected = config.rules().word_length();
    ensure!(
        guess.chars().all(|c| c.is_ascii_alphabetic()),
        "guess must contain only ASCII letters, got '{guess}'"
    );
    ensure!(
        guess.len() == expected,
        "guess must be exactly {expected} letters, got {}",
        guess.len()
    );

    let attempt = Attempt::from_text(guess);
    Ok(ScoreResult {
        guess: attempt.text(),
        feedback: evaluate(&attempt, config.secret()),
    })
}
