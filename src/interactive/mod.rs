//! Interactive TUI interface
//!
//! Terminal front-end built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
