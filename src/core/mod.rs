//! Core domain types for the puzzle
//!
//! Pure, deterministic evaluation: classifying letters, evaluating rows and
//! folding rows into keyboard knowledge. Nothing here holds game state.

mod evaluate;
mod keyboard;
mod rules;
mod status;
mod word;

pub use evaluate::{EvaluatedTile, Feedback, classify, evaluate};
pub use keyboard::{KeyboardKnowledge, aggregate};
pub use rules::{MAX_DIMENSION, Ruleset, RulesetError};
pub use status::LetterStatus;
pub use word::{Attempt, Secret, SecretError};
