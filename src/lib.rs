//! Word Puzzle
//!
//! Guess a secret word in a fixed number of attempts, with per-letter feedback
//! after each one.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::core::LetterStatus;
//! use wordle_board::game::{Game, GameOutcome};
//!
//! let mut game = Game::classic("pline").unwrap();
//! for key in "plane".chars() {
//!     game.append_letter(key);
//! }
//! game.submit_attempt().unwrap();
//!
//! assert_eq!(game.keyboard().get('A'), LetterStatus::Absent);
//! assert_eq!(game.outcome(), GameOutcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Game state machine and input
pub mod game;

// Configuration from command-line options
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
