//! Word Puzzle - CLI
//!
//! Play in a TUI (default) or line mode, score single guesses, replay games
//! and run recorded games in bulk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wordle_board::{
    commands::{replay_guesses, run_batch_file, run_simple, score_guess},
    config::{DEFAULT_SECRET, GameConfig},
    output::{print_batch_result, print_replay_result, print_score_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Word-guessing puzzle with per-letter feedback",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word for new games
    #[arg(short, long, global = true, env = "WORDLE_SECRET", default_value = DEFAULT_SECRET)]
    secret: String,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Attempts per game
    #[arg(short = 'a', long, global = true, default_value = "6")]
    attempts: usize,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line)
    Simple,

    /// Score one guess against the secret
    Score {
        /// The guess to score
        guess: String,
    },

    /// Replay guesses through a fresh game
    Replay {
        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Play recorded games from a file in parallel
    Batch {
        /// File with one `SECRET GUESS...` game per line
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);
    let _guard = setup_logging(cli.log_file.as_deref(), tui)?;

    let config = GameConfig::from_options(&cli.secret, cli.length, cli.attempts)
        .context("invalid game options")?;
    tracing::info!(
        word_length = config.rules().word_length(),
        max_attempts = config.rules().max_attempts(),
        "configuration loaded"
    );

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess } => {
            let result = score_guess(&config, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Replay { guesses } => {
            let result = replay_guesses(config.new_game(), &guesses);
            print_replay_result(&result)?;
            Ok(())
        }
        Commands::Batch { file } => {
            let result = run_batch_file(&config, &file)?;
            print_batch_result(&result)?;
            Ok(())
        }
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_board::interactive::{App, run_tui};

    run_tui(App::new(config))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let stats = run_simple(config, stdin, stdout)?;
    tracing::info!(
        games = stats.total_games,
        won = stats.games_won,
        "simple session ended"
    );
    Ok(())
}

/// Install the tracing subscriber
///
/// `RUST_LOG` picks the level (default `warn`). With `log_file` set, logs go
/// to that file through a non-blocking writer; otherwise they go to stderr,
/// except in the TUI where they are dropped so the screen stays clean.
fn setup_logging(log_file: Option<&Path>, tui: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let name = path
            .file_name()
            .context("log file path has no file name")?;

        let file_appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Ok(Some(guard));
    }

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(None)
}
