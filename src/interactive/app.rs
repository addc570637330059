//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Game, GameKey, GameOutcome, IntoGameKey, Statistics, Step};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Application state
pub struct App {
    pub config: GameConfig,
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl IntoGameKey for KeyEvent {
    fn into_game_key(self) -> Option<GameKey> {
        if self
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match self.code {
            KeyCode::Char(c) => c.into_game_key(),
            KeyCode::Backspace => Some(GameKey::Backspace),
            KeyCode::Enter => Some(GameKey::Enter),
            _ => None,
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let game = config.new_game();
        let mut app = Self {
            config,
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                app.config.rules().word_length(),
                app.config.rules().max_attempts()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.new_game();
                return;
            }
            KeyCode::Enter if self.game.outcome().is_terminal() => {
                self.new_game();
                return;
            }
            _ => {}
        }

        match self.game.on_key(key) {
            Ok(Step::Applied) if self.game.outcome().is_terminal() => self.finish_game(),
            Ok(_) => {}
            Err(err) => {
                debug!(%err, "submission rejected");
                self.add_message("Not enough letters", MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.game);

        if self.game.outcome() == GameOutcome::Won {
            let celebration = match self.game.active_index() {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("The word was {}", self.game.secret()),
                MessageStyle::Error,
            );
        }
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(%err, "tui exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
