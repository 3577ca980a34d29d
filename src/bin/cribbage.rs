use clap::{Parser, ValueEnum};
use cribbage_rs::agents::Difficulty;
use cribbage_rs::config::{GameConfig, OpponentKind};
use cribbage_rs::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cribbage-rs")]
#[command(about = "Play two-player cribbage against the computer", version)]
struct Args {
    /// Deck seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Opponent strategy
    #[arg(long, value_enum, default_value_t = Opponent::FirstLegal)]
    opponent: Opponent,

    /// Milliseconds between automatic moves
    #[arg(long, default_value_t = 600)]
    tick_ms: u64,

    /// Write logs here; RUST_LOG picks the level
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    FirstLegal,
    Easy,
    Medium,
    Hard,
}

impl From<Opponent> for OpponentKind {
    fn from(opponent: Opponent) -> Self {
        match opponent {
            Opponent::FirstLegal => OpponentKind::FirstLegal,
            Opponent::Easy => OpponentKind::Bot(Difficulty::Easy),
            Opponent::Medium => OpponentKind::Bot(Difficulty::Medium),
            Opponent::Hard => OpponentKind::Bot(Difficulty::Hard),
        }
    }
}

// The terminal owns stdout, so logs go to a file or nowhere.
fn init_tracing(log_file: Option<&PathBuf>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);
    match log_file {
        Some(path) => builder.with_writer(Mutex::new(File::create(path)?)).init(),
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if !io::stdout().is_terminal() {
        println!(
            "cribbage-rs TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            cribbage_rs::VERSION
        );
        return Ok(());
    }
    init_tracing(args.log_file.as_ref())?;

    let mut config = GameConfig::new().with_opponent(args.opponent.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!(seed = ?config.seed, opponent = ?args.opponent, "starting");

    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(config);
    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(args.tick_ms.max(1)));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
