//! Keyboard knowledge: best-known status per alphabet letter

use super::{EvaluatedTile, LetterStatus};

const ALPHABET_LEN: usize = 26;

/// Best-known status for each of the 26 letters
///
/// Built by folding evaluated rows with [`LetterStatus::best`], so the result
/// does not depend on the order rows are folded in and a letter never drops
/// below the best status it has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardKnowledge {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl KeyboardKnowledge {
    /// Every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a letter, case-insensitive
    ///
    /// Non-letters are always `Unknown`.
    #[must_use]
    pub fn get(&self, letter: char) -> LetterStatus {
        slot(letter).map_or(LetterStatus::Unknown, |i| self.statuses[i])
    }

    /// Raise a letter's status if `status` outranks what is known
    pub fn observe(&mut self, letter: char, status: LetterStatus) {
        if let Some(i) = slot(letter) {
            self.statuses[i] = self.statuses[i].best(status);
        }
    }

    /// Fold one evaluated row in; blank tiles are skipped
    pub fn observe_row(&mut self, tiles: &[EvaluatedTile]) {
        for tile in tiles {
            if let Some(letter) = tile.letter {
                self.observe(letter, tile.status);
            }
        }
    }

    /// `('A', status) .. ('Z', status)`
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        ('A'..='Z').zip(self.statuses.iter().copied())
    }
}

fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
}

/// Fold evaluated rows of submitted attempts into keyboard knowledge
///
/// Callers pass only submitted rows; the live row must not leak into the
/// keyboard.
///
/// # Examples
/// ```
/// use wordle_board::core::{aggregate, evaluate, Attempt, LetterStatus, Secret};
///
/// let secret = Secret::new("pline").unwrap();
/// let rows = [evaluate(&Attempt::from_text("plane"), &secret)];
/// let keyboard = aggregate(&rows);
///
/// assert_eq!(keyboard.get('P'), LetterStatus::Correct);
/// assert_eq!(keyboard.get('A'), LetterStatus::Absent);
/// assert_eq!(keyboard.get('Z'), LetterStatus::Unknown);
/// ```
pub fn aggregate<I, R>(rows: I) -> KeyboardKnowledge
where
    I: IntoIterator<Item = R>,
    R: AsRef<[EvaluatedTile]>,
{
    rows.into_iter()
        .fold(KeyboardKnowledge::new(), |mut knowledge, row| {
            knowledge.observe_row(row.as_ref());
            knowledge
        })
}
