//! Secret and attempt words
//!
//! A `Secret` stores the hidden word along with the set of letters it
//! contains. An `Attempt` is one board row being typed or already
//! submitted.

use super::Ruleset;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// The hidden word for one game
///
/// Stored uppercase as bytes, with a letter set so that "does this letter
/// occur anywhere" is a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    text: String,
    letters: Vec<u8>,
    letter_set: FxHashSet<u8>,
}

/// Error type for invalid secrets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("secret word must not be empty")]
    Empty,
    #[error("secret word must contain only ASCII letters")]
    NonAscii,
    #[error("secret word contains invalid characters")]
    InvalidCharacters,
    #[error("secret word must be exactly {expected} letters, got {actual}")]
    Length { expected: usize, actual: usize },
}

impl Secret {
    /// Create a secret from any-case ASCII letters
    ///
    /// # Errors
    /// Returns `SecretError` if the text is empty, non-ASCII or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::Secret;
    ///
    /// let secret = Secret::new("pline").unwrap();
    /// assert_eq!(secret.text(), "PLINE");
    ///
    /// assert!(Secret::new("pl1ne").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SecretError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SecretError::Empty);
        }
        if !text.is_ascii() {
            return Err(SecretError::NonAscii);
        }
        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(SecretError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let letters = text.as_bytes().to_vec();

        let letter_set = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            letter_set,
        })
    }

    /// Create a secret and check it fits the ruleset's word length
    ///
    /// # Errors
    /// Everything [`Secret::new`] rejects, plus `SecretError::Length`.
    pub fn with_rules(text: &str, rules: Ruleset) -> Result<Self, SecretError> {
        let secret = Self::new(text)?;
        if secret.len() != rules.word_length() {
            return Err(SecretError::Length {
                expected: rules.word_length(),
                actual: secret.len(),
            });
        }
        Ok(secret)
    }

    /// The secret as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The secret as uppercase bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed secret
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at a position, `None` past the end
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.letters.get(position).copied()
    }

    /// Check if the secret contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_set.contains(&letter)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// One row of the board
///
/// Holds up to L uppercase letters. The game decides when it may change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attempt {
    letters: Vec<u8>,
}

impl Attempt {
    /// Build an attempt from text, uppercasing and dropping non-letters
    ///
    /// Meant for tests and replays; live input goes through the game.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            letters: text
                .bytes()
                .filter(u8::is_ascii_alphabetic)
                .map(|b| b.to_ascii_uppercase())
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letters as a string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// True when the letters spell the secret exactly
    #[must_use]
    pub fn matches(&self, secret: &Secret) -> bool {
        self.letters == secret.letters()
    }

    pub(crate) fn push(&mut self, letter: u8) {
        self.letters.push(letter);
    }

    pub(crate) fn pop(&mut self) -> Option<u8> {
        self.letters.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.letters.clear();
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_creation_valid() {
        let secret = Secret::new("PLINE").unwrap();
        assert_eq!(secret.text(), "PLINE");
        assert_eq!(secret.letters(), b"PLINE");
        assert_eq!(secret.len(), 5);
    }

    #[test]
    fn secret_creation_lowercase_normalized() {
        assert_eq!(Secret::new("pline").unwrap().text(), "PLINE");
        assert_eq!(Secret::new("PlInE").unwrap().text(), "PLINE");
    }

    #[test]
    fn secret_creation_invalid() {
        assert_eq!(Secret::new(""), Err(SecretError::Empty));
        assert_eq!(Secret::new("   "), Err(SecretError::Empty));
        assert_eq!(Secret::new("plïne"), Err(SecretError::NonAscii));
        assert_eq!(Secret::new("pl1ne"), Err(SecretError::InvalidCharacters));
        assert_eq!(Secret::new("pl ne"), Err(SecretError::InvalidCharacters));
    }

    #[test]
    fn secret_with_rules_checks_length() {
        let rules = Ruleset::CLASSIC;
        assert!(Secret::with_rules("pline", rules).is_ok());
        assert_eq!(
            Secret::with_rules("plines", rules),
            Err(SecretError::Length {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn secret_letter_lookup() {
        let secret = Secret::new("pline").unwrap();
        assert_eq!(secret.letter_at(0), Some(b'P'));
        assert_eq!(secret.letter_at(4), Some(b'E'));
        assert_eq!(secret.letter_at(5), None);
        assert!(secret.has_letter(b'N'));
        assert!(!secret.has_letter(b'A'));
        assert!(!secret.has_letter(b'n'));
    }

    #[test]
    fn secret_with_duplicate_letters() {
        let secret = Secret::new("speed").unwrap();
        assert_eq!(secret.len(), 5);
        assert!(secret.has_letter(b'E'));
        assert_eq!(secret.letter_at(2), Some(b'E'));
        assert_eq!(secret.letter_at(3), Some(b'E'));
        assert!(!secret.has_letter(b'Z'));
    }

    #[test]
    fn attempt_from_text_normalizes() {
        let attempt = Attempt::from_text("pl-ane");
        assert_eq!(attempt.text(), "PLANE");
        assert_eq!(attempt.len(), 5);
    }

    #[test]
    fn attempt_matches_secret() {
        let secret = Secret::new("pline").unwrap();
        assert!(Attempt::from_text("pline").matches(&secret));
        assert!(!Attempt::from_text("plane").matches(&secret));
        assert!(!Attempt::from_text("plin").matches(&secret));
    }

    #[test]
    fn attempt_push_pop() {
        let mut attempt = Attempt::default();
        attempt.push(b'A');
        attempt.push(b'B');
        assert_eq!(attempt.pop(), Some(b'B'));
        assert_eq!(attempt.text(), "A");
        attempt.clear();
        assert!(attempt.is_empty());
        assert_eq!(attempt.pop(), None);
    }
}
