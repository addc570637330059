//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_result, print_replay_result, print_score_result, write_board, write_keyboard,
    write_outcome, write_statistics,
};
