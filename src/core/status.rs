//! Per-letter feedback classification
//!
//! Variants are declared in ascending precedence so that `Ord` gives the
//! aggregation order directly: `Unknown < Absent < Present < Correct`.

use std::fmt;

/// Classification of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    /// Not yet evaluated (keyboard keys never typed in a submitted row)
    #[default]
    Unknown,
    /// Letter does not occur in the secret
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

impl LetterStatus {
    /// Whichever of the two carries more information
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::Present.best(LetterStatus::Correct), LetterStatus::Correct);
    /// assert_eq!(LetterStatus::Absent.best(LetterStatus::Unknown), LetterStatus::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn best(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji square for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unknown => '⬜',
        }
    }

    /// Lowercase name, as shown in logs and plain output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(LetterStatus::Correct > LetterStatus::Present);
        assert!(LetterStatus::Present > LetterStatus::Absent);
        assert!(LetterStatus::Absent > LetterStatus::Unknown);
    }

    #[test]
    fn best_is_symmetric() {
        let all = [
            LetterStatus::Unknown,
            LetterStatus::Absent,
            LetterStatus::Present,
            LetterStatus::Correct,
        ];
        for a in all {
            for b in all {
                assert_eq!(a.best(b), b.best(a));
            }
        }
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(LetterStatus::default(), LetterStatus::Unknown);
    }
}
