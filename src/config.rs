//! Game configuration assembled from command-line options

use crate::core::{Ruleset, RulesetError, Secret, SecretError};
use crate::game::Game;
use thiserror::Error;

/// Secret used when none is given
pub const DEFAULT_SECRET: &str = "PLINE";

/// Errors that can occur when building a configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid ruleset: {0}")]
    Ruleset(#[from] RulesetError),

    #[error("invalid secret: {0}")]
    Secret(#[from] SecretError),
}

/// Ruleset plus the validated secret every new game starts from
///
/// Only [`GameConfig::from_options`] builds one, so the secret always fits
/// the ruleset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    fresh: Game,
}

impl GameConfig {
    /// Validate raw option values
    ///
    /// # Errors
    /// Returns `ConfigError` if the dimensions are out of range or the secret
    /// is not `word_length` ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::config::GameConfig;
    ///
    /// let config = GameConfig::from_options("crane", 5, 6).unwrap();
    /// assert_eq!(config.secret().text(), "CRANE");
    /// assert!(GameConfig::from_options("crane", 4, 6).is_err());
    /// ```
    pub fn from_options(
        secret: &str,
        word_length: usize,
        max_attempts: usize,
    ) -> Result<Self, ConfigError> {
        let rules = Ruleset::new(word_length, max_attempts)?;
        let secret = Secret::with_rules(secret, rules)?;
        Ok(Self {
            fresh: Game::new(rules, secret)?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Ruleset {
        self.fresh.rules()
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        self.fresh.secret()
    }

    /// Parse a secret under this configuration's ruleset
    ///
    /// # Errors
    /// Returns `SecretError` if `text` does not fit the ruleset.
    pub fn secret_for(&self, text: &str) -> Result<Secret, SecretError> {
        Secret::with_rules(text, self.rules())
    }

    /// Fresh game with the configured secret
    #[must_use]
    pub fn new_game(&self) -> Game {
        self.fresh.clone()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        match Self::from_options(DEFAULT_SECRET, 5, 6) {
            Ok(config) => config,
            Err(e) => unreachable!("default configuration is invalid: {e}"),
        }
    }
}
