//! simbank - voice-guided demo bank for the terminal
//!
//! Signup with email verification, PIN login, transfers, bill payments and
//! a spending report, in English, Kannada or Hindi. Every screen is narrated
//! the first time it is shown in a language.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use simbank::application::App;
use simbank::domain::Language;
use simbank::infrastructure::{FileRepository, MemoryRepository, Settings, Storage, load_settings};
use simbank::presentation::{InputHandler, render_ui};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "simbank", version, about = "Voice-guided demo bank in the terminal")]
struct Args {
    /// Settings file (defaults to ./simbank.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for account data, exports and the log
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Interface language: en, kn or hi
    #[arg(short, long, value_parser = parse_language)]
    language: Option<Language>,
}

fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_code(raw).ok_or_else(|| format!("unknown language {raw:?}, expected en, kn or hi"))
}

/// Entry point for the simbank terminal application.
///
/// Resolves settings, starts file logging, then runs the terminal UI until
/// the user quits. The terminal is restored even when the loop fails.
///
/// # Errors
///
/// Returns an error if the settings file cannot be read or parsed, if the
/// log file or data directory cannot be opened, or if terminal setup or the
/// event loop fails.
fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref()).context("loading settings")?;
    if let Some(dir) = args.data_dir {
        settings.data_dir = dir;
    }
    if let Some(language) = args.language {
        settings.default_language = language;
    }

    init_logging(&settings)?;
    info!(data_dir = %settings.data_dir.display(), in_memory = settings.in_memory, "starting simbank");

    let storage: Box<dyn Storage> = if settings.in_memory {
        Box::new(MemoryRepository::default())
    } else {
        Box::new(
            FileRepository::new(&settings.data_dir)
                .with_context(|| format!("opening data directory {}", settings.data_dir.display()))?,
        )
    };
    let mut app = App::new(settings, storage);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res.context("terminal event loop failed")?;
    info!("simbank exited");
    Ok(())
}

/// Sends tracing output to the log file. The terminal belongs to the UI.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
fn init_logging(settings: &Settings) -> Result<()> {
    let path = settings.log_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Main application event loop.
///
/// Draws, polls for a key for up to one tick, then lets pending receiver
/// lookups advance. Returns once the app asks to quit.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    InputHandler::handle_key_event(app, key.code, key.modifiers);
                }
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
