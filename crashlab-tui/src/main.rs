//! CrashLab TUI — single-screen dashboard for the crash predictor.
//!
//! Layout:
//! 1. Multiplier input (Enter adds, Ctrl+R resets)
//! 2. Flat and martingale balance chart
//! 3. Accuracy metrics
//! 4. Record history with martingale stakes
//! 5. Status bar

mod app;
mod input;
mod theme;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use crashlab_core::{CrashlabConfig, CsvRecordStore, PredictionSource, RecordStore, Session};

use crate::app::{AppState, DynSession};

#[derive(Parser)]
#[command(
    name = "crashlab-tui",
    about = "CrashLab dashboard — flat & martingale balance tracker"
)]
struct Args {
    /// Config file. Defaults to <config_dir>/crashlab/crashlab.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record file (overrides the config).
    #[arg(long)]
    results: Option<PathBuf>,

    /// Seed for the prediction coin (overrides the config).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CrashlabConfig::resolve(args.config.as_deref())?
        .with_overrides(args.results, args.seed);

    init_logging(&config)?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    tracing::info!(results = %config.results_file.display(), seed = ?config.seed, "starting dashboard");

    let store: Box<dyn RecordStore> = Box::new(CsvRecordStore::new(&config.results_file));
    let source: Box<dyn PredictionSource> = Box::new(config.coin());
    let session: DynSession = Session::new(store, source);
    let mut app = AppState::new(session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to the configured file. Without one, nothing is logged: stderr would
/// scribble over the alternate screen.
fn init_logging(config: &CrashlabConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log dir: {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
