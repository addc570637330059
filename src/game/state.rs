//! Game state machine
//!
//! Owns the board and the active-row cursor. Tiles and keyboard knowledge are
//! never stored; every accessor recomputes them from the board and secret.

use super::input::{GameKey, IntoGameKey};
use crate::core::{
    Attempt, Feedback, KeyboardKnowledge, Ruleset, Secret, SecretError, aggregate, evaluate,
};
use thiserror::Error;
use tracing::{debug, info};

/// Overall game result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    /// Won or lost; the board no longer changes
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a mutating call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Applied,
    /// Nothing changed: the game is over, the row is full or empty, or the
    /// key was not a letter
    Ignored,
}

/// Rejected submission; the game is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("not enough letters: need {expected}, have {actual}")]
    InvalidSubmission { expected: usize, actual: usize },
}

/// Where a row sits relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Completed,
    Active,
    Future,
}

/// One board row as the view sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub state: RowState,
    pub tiles: Feedback,
}

/// A single game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    rules: Ruleset,
    secret: Secret,
    board: Vec<Attempt>,
    active: usize,
    outcome: GameOutcome,
}

impl Game {
    /// Start a game
    ///
    /// # Errors
    /// Returns `SecretError::Length` if the secret does not have the
    /// ruleset's word length.
    pub fn new(rules: Ruleset, secret: Secret) -> Result<Self, SecretError> {
        check_length(&secret, rules)?;
        info!(word_length = rules.word_length(), max_attempts = rules.max_attempts(), "new game");
        Ok(Self {
            rules,
            secret,
            board: vec![Attempt::default(); rules.max_attempts()],
            active: 0,
            outcome: GameOutcome::InProgress,
        })
    }

    /// Start a classic five-letter, six-row game
    ///
    /// # Errors
    /// Returns `SecretError` if `secret` is not five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::game::{Game, GameOutcome};
    ///
    /// let mut game = Game::classic("pline").unwrap();
    /// for key in ["P", "L", "I", "N", "E", "Enter"] {
    ///     game.on_key(key).unwrap();
    /// }
    /// assert_eq!(game.outcome(), GameOutcome::Won);
    /// ```
    pub fn classic(secret: &str) -> Result<Self, SecretError> {
        let rules = Ruleset::CLASSIC;
        Self::new(rules, Secret::with_rules(secret, rules)?)
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Ruleset {
        self.rules
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Index of the row being typed; equals the number of submitted rows
    #[inline]
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// All R rows, submitted or not
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.board
    }

    /// The row being typed, `None` once the game is over
    #[must_use]
    pub fn active_attempt(&self) -> Option<&Attempt> {
        if self.outcome.is_terminal() {
            None
        } else {
            self.board.get(self.active)
        }
    }

    /// Attempt number (1-based) that found the secret
    #[must_use]
    pub const fn winning_attempt(&self) -> Option<usize> {
        match self.outcome {
            GameOutcome::Won => Some(self.active),
            _ => None,
        }
    }

    /// Append a letter to the active row
    pub fn append_letter(&mut self, ch: char) -> Step {
        if self.outcome.is_terminal() || !ch.is_ascii_alphabetic() {
            return Step::Ignored;
        }
        let word_length = self.rules.word_length();
        let Some(attempt) = self.board.get_mut(self.active) else {
            return Step::Ignored;
        };
        if attempt.len() >= word_length {
            return Step::Ignored;
        }

        attempt.push(ch.to_ascii_uppercase() as u8);
        debug!(row = self.active, attempt = %attempt, "letter appended");
        Step::Applied
    }

    /// Remove the last letter of the active row
    pub fn delete_letter(&mut self) -> Step {
        if self.outcome.is_terminal() {
            return Step::Ignored;
        }
        match self.board.get_mut(self.active).and_then(Attempt::pop) {
            Some(_) => {
                debug!(row = self.active, "letter deleted");
                Step::Applied
            }
            None => Step::Ignored,
        }
    }

    /// Lock in the active row and recompute the outcome
    ///
    /// A match wins even on the last row; the loss check only runs when the
    /// row did not match.
    ///
    /// # Errors
    /// Returns `SubmitError::InvalidSubmission` if the active row does not
    /// hold exactly L letters. Nothing is changed in that case.
    pub fn submit_attempt(&mut self) -> Result<Step, SubmitError> {
        if self.outcome.is_terminal() {
            return Ok(Step::Ignored);
        }
        let Some(attempt) = self.board.get(self.active) else {
            return Ok(Step::Ignored);
        };

        let expected = self.rules.word_length();
        if attempt.len() != expected {
            debug!(row = self.active, letters = attempt.len(), "submission rejected");
            return Err(SubmitError::InvalidSubmission {
                expected,
                actual: attempt.len(),
            });
        }

        let solved = attempt.matches(&self.secret);
        debug!(row = self.active, attempt = %attempt, "attempt submitted");
        self.active += 1;

        if solved {
            self.outcome = GameOutcome::Won;
            info!(attempts = self.active, "game won");
        } else if self.active == self.rules.max_attempts() {
            self.outcome = GameOutcome::Lost;
            info!(secret = %self.secret, "game lost");
        }

        Ok(Step::Applied)
    }

    /// Run the operation a key maps to
    ///
    /// Events that do not map to a key are ignored.
    ///
    /// # Errors
    /// Propagates `SubmitError` from [`Game::submit_attempt`].
    pub fn on_key<K: IntoGameKey>(&mut self, event: K) -> Result<Step, SubmitError> {
        match event.into_game_key() {
            Some(GameKey::Letter(ch)) => Ok(self.append_letter(ch)),
            Some(GameKey::Backspace) => Ok(self.delete_letter()),
            Some(GameKey::Enter) => self.submit_attempt(),
            None => Ok(Step::Ignored),
        }
    }

    /// Back to an empty board with the same secret
    pub fn reset(&mut self) {
        for attempt in &mut self.board {
            attempt.clear();
        }
        self.active = 0;
        self.outcome = GameOutcome::InProgress;
        info!("game reset");
    }

    /// Back to an empty board with a new secret
    ///
    /// # Errors
    /// Returns `SecretError::Length` if the secret does not fit the ruleset;
    /// the current game is kept in that case.
    pub fn reset_with(&mut self, secret: Secret) -> Result<(), SecretError> {
        check_length(&secret, self.rules)?;
        self.secret = secret;
        self.reset();
        Ok(())
    }

    /// Evaluated rows of submitted attempts, in order
    #[must_use]
    pub fn submitted(&self) -> Vec<Feedback> {
        self.board[..self.active]
            .iter()
            .map(|attempt| evaluate(attempt, &self.secret))
            .collect()
    }

    /// Every row with its tiles and position relative to the cursor
    #[must_use]
    pub fn rows(&self) -> Vec<RowView> {
        self.board
            .iter()
            .enumerate()
            .map(|(index, attempt)| {
                let state = if index < self.active {
                    RowState::Completed
                } else if index == self.active && !self.outcome.is_terminal() {
                    RowState::Active
                } else {
                    RowState::Future
                };
                RowView {
                    index,
                    state,
                    tiles: evaluate(attempt, &self.secret),
                }
            })
            .collect()
    }

    /// Best-known status per letter across submitted rows
    #[must_use]
    pub fn keyboard(&self) -> KeyboardKnowledge {
        aggregate(self.submitted())
    }
}

fn check_length(secret: &Secret, rules: Ruleset) -> Result<(), SecretError> {
    if secret.len() == rules.word_length() {
        Ok(())
    } else {
        Err(SecretError::Length {
            expected: rules.word_length(),
            actual: secret.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{self, Absent, Correct, Unknown};

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.append_letter(ch);
        }
    }

    fn submit(game: &mut Game, word: &str) -> Result<Step, SubmitError> {
        type_word(game, word);
        game.submit_attempt()
    }

    fn assert_initial(game: &Game) {
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert_eq!(game.active_index(), 0);
        assert_eq!(game.attempts().len(), game.rules().max_attempts());
        assert!(game.attempts().iter().all(Attempt::is_empty));
    }

    #[test]
    fn new_game_is_empty() {
        let game = Game::classic("pline").unwrap();
        assert_initial(&game);
        assert!(game.submitted().is_empty());
        assert!(game.keyboard().iter().all(|(_, s)| s == Unknown));
    }

    #[test]
    fn secret_length_must_match_rules() {
        let rules = Ruleset::new(4, 6).unwrap();
        let secret = Secret::new("pline").unwrap();
        assert_eq!(
            Game::new(rules, secret).unwrap_err(),
            SecretError::Length {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn append_uppercases_and_stops_at_word_length() {
        let mut game = Game::classic("pline").unwrap();
        assert_eq!(game.append_letter('p'), Step::Applied);
        type_word(&mut game, "lane");
        assert_eq!(game.append_letter('s'), Step::Ignored);
        assert_eq!(game.attempts()[0].text(), "PLANE");
    }

    #[test]
    fn append_ignores_non_letters() {
        let mut game = Game::classic("pline").unwrap();
        assert_eq!(game.append_letter('1'), Step::Ignored);
        assert_eq!(game.append_letter(' '), Step::Ignored);
        assert_eq!(game.append_letter('é'), Step::Ignored);
        assert!(game.attempts()[0].is_empty());
    }

    #[test]
    fn delete_removes_last_letter_or_ignores() {
        let mut game = Game::classic("pline").unwrap();
        assert_eq!(game.delete_letter(), Step::Ignored);
        type_word(&mut game, "pla");
        assert_eq!(game.delete_letter(), Step::Applied);
        assert_eq!(game.attempts()[0].text(), "PL");
    }

    #[test]
    fn short_submission_is_rejected_without_change() {
        let mut game = Game::classic("pline").unwrap();
        type_word(&mut game, "plan");
        let before = game.attempts().to_vec();

        assert_eq!(
            game.submit_attempt(),
            Err(SubmitError::InvalidSubmission {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(game.attempts(), before.as_slice());
        assert_eq!(game.active_index(), 0);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn plane_then_pline_wins_on_second_row() {
        let mut game = Game::classic("PLINE").unwrap();

        assert_eq!(submit(&mut game, "plane"), Ok(Step::Applied));
        assert_eq!(
            game.submitted()[0].statuses(),
            vec![Correct, Correct, Absent, Correct, Correct]
        );
        assert_eq!(game.outcome(), GameOutcome::InProgress);

        assert_eq!(submit(&mut game, "pline"), Ok(Step::Applied));
        assert!(game.submitted()[1].is_solved());
        assert_eq!(game.outcome(), GameOutcome::Won);
        assert_eq!(game.active_index(), 2);
        assert_eq!(game.winning_attempt(), Some(2));
    }

    #[test]
    fn six_wrong_rows_lose() {
        let mut game = Game::classic("pline").unwrap();
        for word in ["plane", "crane", "slate", "nails", "quirk", "bravo"] {
            assert_eq!(submit(&mut game, word), Ok(Step::Applied));
        }
        assert_eq!(game.outcome(), GameOutcome::Lost);
        assert_eq!(game.active_index(), 6);
        assert_eq!(game.winning_attempt(), None);
        assert!(game.active_attempt().is_none());
    }

    #[test]
    fn win_on_last_row_is_not_a_loss() {
        let mut game = Game::classic("pline").unwrap();
        for word in ["plane", "crane", "slate", "nails", "quirk"] {
            submit(&mut game, word).unwrap();
        }
        submit(&mut game, "pline").unwrap();
        assert_eq!(game.outcome(), GameOutcome::Won);
        assert_eq!(game.winning_attempt(), Some(6));
    }

    #[test]
    fn terminal_game_ignores_everything() {
        let mut game = Game::classic("pline").unwrap();
        submit(&mut game, "pline").unwrap();
        let before = game.attempts().to_vec();

        assert_eq!(game.append_letter('a'), Step::Ignored);
        assert_eq!(game.delete_letter(), Step::Ignored);
        assert_eq!(game.submit_attempt(), Ok(Step::Ignored));
        assert_eq!(game.on_key("Enter"), Ok(Step::Ignored));
        assert_eq!(game.attempts(), before.as_slice());
        assert_eq!(game.active_index(), 1);
    }

    #[test]
    fn lost_game_ignores_everything() {
        let mut game = Game::classic("pline").unwrap();
        for word in ["plane"; 6] {
            submit(&mut game, word).unwrap();
        }
        assert_eq!(game.append_letter('p'), Step::Ignored);
        assert_eq!(game.delete_letter(), Step::Ignored);
        assert_eq!(game.submit_attempt(), Ok(Step::Ignored));
        assert_eq!(game.active_index(), 6);
    }

    #[test]
    fn reset_after_win_and_loss() {
        let mut game = Game::classic("pline").unwrap();
        submit(&mut game, "pline").unwrap();
        game.reset();
        assert_initial(&game);

        for _ in 0..6 {
            submit(&mut game, "plane").unwrap();
        }
        assert_eq!(game.outcome(), GameOutcome::Lost);
        game.reset();
        assert_initial(&game);
        assert_eq!(game.secret().text(), "PLINE");
    }

    #[test]
    fn reset_with_new_secret() {
        let mut game = Game::classic("pline").unwrap();
        submit(&mut game, "crane").unwrap();

        game.reset_with(Secret::new("crane").unwrap()).unwrap();
        assert_initial(&game);
        submit(&mut game, "crane").unwrap();
        assert_eq!(game.outcome(), GameOutcome::Won);
    }

    #[test]
    fn reset_with_wrong_length_keeps_game() {
        let mut game = Game::classic("pline").unwrap();
        submit(&mut game, "crane").unwrap();

        assert!(game.reset_with(Secret::new("cranes").unwrap()).is_err());
        assert_eq!(game.active_index(), 1);
        assert_eq!(game.secret().text(), "PLINE");
    }

    #[test]
    fn keyboard_excludes_active_row() {
        let mut game = Game::classic("pline").unwrap();
        submit(&mut game, "plane").unwrap();
        type_word(&mut game, "quirk");

        let keyboard = game.keyboard();
        assert_eq!(keyboard.get('P'), Correct);
        assert_eq!(keyboard.get('A'), Absent);
        assert_eq!(keyboard.get('Q'), LetterStatus::Unknown);
        assert_eq!(keyboard.get('I'), LetterStatus::Unknown);
    }

    #[test]
    fn rows_report_state_and_tiles() {
        let mut game = Game::classic("pline").unwrap();
        submit(&mut game, "plane").unwrap();
        type_word(&mut game, "pl");

        let rows = game.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].state, RowState::Completed);
        assert_eq!(rows[1].state, RowState::Active);
        assert_eq!(rows[2].state, RowState::Future);
        assert_eq!(rows[1].tiles.len(), 5);
        assert_eq!(rows[1].tiles.tiles()[1].letter, Some('L'));
        assert_eq!(rows[1].tiles.tiles()[2].letter, None);
    }

    #[test]
    fn rows_have_no_active_row_after_win() {
        let mut game = Game::classic("pline").unwrap();
        submit(&mut game, "pline").unwrap();
        let rows = game.rows();
        assert_eq!(rows[0].state, RowState::Completed);
        assert!(rows[1..].iter().all(|row| row.state == RowState::Future));
    }

    #[test]
    fn custom_rules_shape_the_board() {
        let rules = Ruleset::new(3, 2).unwrap();
        let mut game = Game::new(rules, Secret::new("cat").unwrap()).unwrap();
        submit(&mut game, "dog").unwrap();
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        submit(&mut game, "cow").unwrap();
        assert_eq!(game.outcome(), GameOutcome::Lost);
        assert_eq!(game.rows()[0].tiles.len(), 3);
    }
}
