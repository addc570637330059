//! Ruleset: word length and attempt budget

use thiserror::Error;

/// Largest word length or attempt count the board will accept.
pub const MAX_DIMENSION: usize = 16;

/// The two numbers that define a game: letters per word and rows on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ruleset {
    word_length: usize,
    max_attempts: usize,
}

/// Error type for rejected rulesets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetError {
    #[error("word length must be between 1 and {max}, got {0}", max = MAX_DIMENSION)]
    WordLength(usize),
    #[error("attempt count must be between 1 and {max}, got {0}", max = MAX_DIMENSION)]
    MaxAttempts(usize),
}

impl Ruleset {
    /// Classic rules: five letters, six attempts
    pub const CLASSIC: Self = Self {
        word_length: 5,
        max_attempts: 6,
    };

    /// Create a ruleset
    ///
    /// # Errors
    /// Returns `RulesetError` if either dimension is zero or above [`MAX_DIMENSION`].
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::Ruleset;
    ///
    /// let rules = Ruleset::new(4, 8).unwrap();
    /// assert_eq!(rules.word_length(), 4);
    /// assert!(Ruleset::new(0, 6).is_err());
    /// ```
    pub const fn new(word_length: usize, max_attempts: usize) -> Result<Self, RulesetError> {
        if word_length == 0 || word_length > MAX_DIMENSION {
            return Err(RulesetError::WordLength(word_length));
        }
        if max_attempts == 0 || max_attempts > MAX_DIMENSION {
            return Err(RulesetError::MaxAttempts(max_attempts));
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    /// Letters per word (L)
    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        self.word_length
    }

    /// Rows on the board (R)
    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        self.max_attempts
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::CLASSIC
    }
}
