//! Command implementations

pub mod batch;
pub mod replay;
pub mod score;
pub mod simple;

pub use batch::{BatchGame, BatchGameResult, BatchResult, parse_batch, run_batch, run_batch_file};
pub use replay::{ReplayEvent, ReplayResult, ReplayStep, replay_guesses};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
