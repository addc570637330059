//! Replay a list of guesses through a fresh game
//!
//! Each guess is typed key by key and submitted, as it would be at the
//! keyboard. Letters beyond the word length are dropped by the game.

use crate::core::Feedback;
use crate::game::{Game, GameKey, Step, SubmitError, keys_for_line};

/// What happened to one replayed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    Submitted(Feedback),
    Rejected(SubmitError),
    /// The game had already ended
    Ignored,
}

#[derive(Debug, Clone)]
pub struct ReplayStep {
    pub guess: String,
    pub event: ReplayEvent,
}

/// Result of replaying guesses
pub struct ReplayResult {
    pub steps: Vec<ReplayStep>,
    pub game: Game,
}

/// Feed one line into the game; a rejected row is cleared so the next line
/// starts fresh
pub(crate) fn play_line(game: &mut Game, line: &str) -> ReplayEvent {
    if game.outcome().is_terminal() {
        return ReplayEvent::Ignored;
    }

    let mut result = Ok(Step::Ignored);
    for key in keys_for_line(line) {
        result = game.on_key(key);
    }

    match result {
        Ok(Step::Applied) => game
            .submitted()
            .pop()
            .map_or(ReplayEvent::Ignored, ReplayEvent::Submitted),
        Ok(Step::Ignored) => ReplayEvent::Ignored,
        Err(err) => {
            while game.on_key(GameKey::Backspace) == Ok(Step::Applied) {}
            ReplayEvent::Rejected(err)
        }
    }
}

/// Play every guess in order
#[must_use]
pub fn replay_guesses<S: AsRef<str>>(mut game: Game, guesses: &[S]) -> ReplayResult {
    let steps = guesses
        .iter()
        .map(|guess| ReplayStep {
            guess: guess.as_ref().to_string(),
            event: play_line(&mut game, guess.as_ref()),
        })
        .collect();

    ReplayResult { steps, game }
}
