//! Session statistics
//!
//! Kept in memory for the life of the process only.

use super::{Game, GameOutcome};
use crate::core::MAX_DIMENSION;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins on attempt `n` (index 0 unused)
    pub guess_distribution: [usize; MAX_DIMENSION + 1],
}

impl Statistics {
    /// Tally a finished game; games still in progress are skipped
    pub fn record(&mut self, game: &Game) {
        match game.outcome() {
            GameOutcome::InProgress => {}
            GameOutcome::Lost => self.total_games += 1,
            GameOutcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(n) = game.winning_attempt()
                    && let Some(slot) = self.guess_distribution.get_mut(n)
                {
                    *slot += 1;
                }
            }
        }
    }

    /// Percentage of recorded games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// `(attempt number, wins)` for attempts `1..=max_attempts`
    pub fn distribution(&self, max_attempts: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=max_attempts.min(MAX_DIMENSION)).map(|n| (n, self.guess_distribution[n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(secret: &str, guesses: &[&str]) -> Game {
        let mut game = Game::classic(secret).unwrap();
        for guess in guesses {
            for ch in guess.chars() {
                game.append_letter(ch);
            }
            game.submit_attempt().unwrap();
        }
        game
    }

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(&play("pline", &["plane", "pline"]));
        stats.record(&play("pline", &["plane"; 6]));
        stats.record(&play("crane", &["crane"]));

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution[1], 1);
        assert_eq!(stats.guess_distribution[2], 1);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn in_progress_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(&play("pline", &["plane"]));
        assert_eq!(stats, Statistics::default());
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_covers_each_attempt() {
        let mut stats = Statistics::default();
        stats.record(&play("pline", &["plane", "plane", "pline"]));
        let dist: Vec<_> = stats.distribution(6).collect();
        assert_eq!(dist.len(), 6);
        assert_eq!(dist[2], (3, 1));
    }
}
