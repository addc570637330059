//! Guess evaluation: letter classifier and attempt evaluator
//!
//! Each position is classified on its own:
//! - Correct when the secret holds the same letter at that position
//! - Present when the letter occurs anywhere else in the secret
//! - Absent otherwise, including blank positions of a short attempt
//!
//! Present marks are not capped by how many unmatched copies of a letter the
//! secret still has. Guessing `EERIE` against `PLINE` marks every `E` that is
//! not in place as present.

use super::{Attempt, LetterStatus, Secret};
use std::fmt;

/// One classified board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluatedTile {
    pub position: usize,
    /// `None` for a position the attempt has not reached yet
    pub letter: Option<char>,
    pub status: LetterStatus,
}

/// Classify the letter an attempt holds at `position`
///
/// `attempt` may be shorter than the secret; positions past its end are blank
/// and classify as `Absent`. `Unknown` is never returned here.
///
/// # Examples
/// ```
/// use wordle_board::core::{LetterStatus, Secret, classify};
///
/// let secret = Secret::new("pline").unwrap();
/// assert_eq!(classify(0, b"PLANE", &secret), LetterStatus::Correct);
/// assert_eq!(classify(2, b"PLANE", &secret), LetterStatus::Absent);
/// assert_eq!(classify(0, b"NAILS", &secret), LetterStatus::Present);
/// assert_eq!(classify(4, b"PL", &secret), LetterStatus::Absent);
/// ```
#[must_use]
pub fn classify(position: usize, attempt: &[u8], secret: &Secret) -> LetterStatus {
    let Some(&letter) = attempt.get(position) else {
        return LetterStatus::Absent;
    };

    if secret.letter_at(position) == Some(letter) {
        LetterStatus::Correct
    } else if secret.has_letter(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}

/// Evaluate every position of an attempt against the secret
///
/// Always yields exactly `secret.len()` tiles, whether the attempt is full,
/// partial or empty.
#[must_use]
pub fn evaluate(attempt: &Attempt, secret: &Secret) -> Feedback {
    let letters = attempt.letters();
    let tiles = (0..secret.len())
        .map(|position| EvaluatedTile {
            position,
            letter: letters.get(position).map(|&b| char::from(b)),
            status: classify(position, letters, secret),
        })
        .collect();

    Feedback(tiles)
}

/// The evaluated tiles of one row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<EvaluatedTile>);

impl Feedback {
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[EvaluatedTile] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvaluatedTile> {
        self.0.iter()
    }

    /// Statuses in position order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.0.iter().map(|tile| tile.status).collect()
    }

    /// Every tile correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|tile| tile.status == LetterStatus::Correct)
    }

    /// Number of tiles with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|tile| tile.status == status).count()
    }

    /// Emoji string such as "🟩🟩⬛🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tile| tile.status.emoji()).collect()
    }
}

impl AsRef<[EvaluatedTile]> for Feedback {
    fn as_ref(&self) -> &[EvaluatedTile] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a EvaluatedTile;
    type IntoIter = std::slice::Iter<'a, EvaluatedTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn eval(guess: &str, secret: &str) -> Vec<LetterStatus> {
        let secret = Secret::new(secret).unwrap();
        evaluate(&Attempt::from_text(guess), &secret).statuses()
    }

    #[test]
    fn plane_against_pline() {
        assert_eq!(
            eval("plane", "pline"),
            vec![Correct, Correct, Absent, Correct, Correct]
        );
    }

    #[test]
    fn exact_match_is_solved() {
        let secret = Secret::new("pline").unwrap();
        let feedback = evaluate(&Attempt::from_text("pline"), &secret);
        assert!(feedback.is_solved());
        assert_eq!(feedback.count(Correct), 5);
        assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("abcdf", "pline"), vec![Absent; 5]);
    }

    #[test]
    fn present_is_not_capped_by_duplicates() {
        // PLINE has a single E, yet both misplaced E's are present
        assert_eq!(
            eval("eerie", "pline"),
            vec![Present, Present, Absent, Present, Correct]
        );
        // SPEED vs ERASE: every E and the S report present
        assert_eq!(
            eval("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn correct_position_wins_over_duplicates_elsewhere() {
        let secret = Secret::new("floor").unwrap();
        for (guess, position) in [("robot", 3), ("ooooo", 2), ("ooooo", 3), ("flair", 0)] {
            let letters = Attempt::from_text(guess);
            assert_eq!(
                classify(position, letters.letters(), &secret),
                Correct,
                "{guess} at {position}"
            );
        }
    }

    #[test]
    fn partial_attempt_pads_with_absent_blanks() {
        let secret = Secret::new("pline").unwrap();
        let feedback = evaluate(&Attempt::from_text("pl"), &secret);

        assert_eq!(feedback.len(), 5);
        assert_eq!(
            feedback.statuses(),
            vec![Correct, Correct, Absent, Absent, Absent]
        );
        assert_eq!(feedback.tiles()[2].letter, None);
        assert_eq!(feedback.tiles()[1].letter, Some('L'));
        assert!(!feedback.is_solved());
    }

    #[test]
    fn empty_attempt_is_all_absent() {
        let secret = Secret::new("pline").unwrap();
        let feedback = evaluate(&Attempt::default(), &secret);
        assert_eq!(feedback.statuses(), vec![Absent; 5]);
        assert!(feedback.iter().all(|tile| tile.letter.is_none()));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let secret = Secret::new("crane").unwrap();
        let attempt = Attempt::from_text("nacre");
        assert_eq!(evaluate(&attempt, &secret), evaluate(&attempt, &secret));
    }

    #[test]
    fn tile_positions_are_sequential() {
        let secret = Secret::new("crane").unwrap();
        let feedback = evaluate(&Attempt::from_text("slate"), &secret);
        for (i, tile) in feedback.iter().enumerate() {
            assert_eq!(tile.position, i);
        }
    }
}
