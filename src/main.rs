// decktty: terminal presenter for build-aware slide decks

mod content;
mod deck;
mod settings;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context as _;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use content::loader::parse_deck;
use deck::config::DeckConfig;
use deck::engine::Deck;
use settings::{JsonSettings, MemorySettings, SettingsStore};
use ui::App;

#[derive(Parser, Debug)]
#[command(name = "decktty", version)]
struct Cli {
    /// Deck file to present.
    deck: PathBuf,

    /// Identity of the slide to open on, instead of the deck's default.
    #[arg(long)]
    start: Option<String>,

    /// Reveal every build step up front.
    #[arg(long)]
    no_builds: bool,

    /// Disable the speaker-notes panel entirely.
    #[arg(long)]
    no_notes: bool,

    /// JSON file for persisted preferences; kept in memory when absent.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Append logs to this file (`RUST_LOG` controls the filter).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Route tracing output to a file; the terminal itself belongs to the TUI
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("decktty=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let source = fs::read_to_string(&cli.deck)
        .with_context(|| format!("reading deck file {}", cli.deck.display()))?;
    let file = parse_deck(&source)
        .with_context(|| format!("parsing deck file {}", cli.deck.display()))?;

    let config = DeckConfig {
        start: cli.start,
        builds_enabled: !cli.no_builds,
        notes_enabled: !cli.no_notes,
        ..DeckConfig::default()
    };
    let store: Box<dyn SettingsStore> = match &cli.settings {
        Some(path) => Box::new(
            JsonSettings::open(path)
                .with_context(|| format!("opening settings file {}", path.display()))?,
        ),
        None => Box::new(MemorySettings::new()),
    };

    let mut deck = Deck::new(file, config, store).context("building deck")?;
    deck.start();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(deck);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("presenter event loop")
}
