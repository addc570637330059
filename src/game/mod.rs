//! Game session: state machine, key input and statistics

mod input;
mod state;
mod stats;

pub use input::{GameKey, IntoGameKey, keys_for_line};
pub use state::{Game, GameOutcome, RowState, RowView, Step, SubmitError};
pub use stats::Statistics;
