//! CrashLab CLI — record multipliers and inspect balances without the dashboard.
//!
//! Commands:
//! - `add` — submit one multiplier, draw a prediction, persist the result
//! - `reset` — delete every persisted record
//! - `status` — latest balances and accuracy (optionally as JSON)
//! - `history` — records with both running balances
//! - `export` — records joined with both balance series as CSV

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crashlab_core::export::export_series_csv;
use crashlab_core::metrics::format_balance;
use crashlab_core::simulator::martingale_stakes;
use crashlab_core::{
    CoinFlip, CrashlabConfig, CsvRecordStore, Dashboard, OutcomeRecord, Session, SessionError,
};

#[derive(Parser)]
#[command(
    name = "crashlab",
    about = "CrashLab CLI — crash predictor with flat & martingale balance tracking"
)]
struct Cli {
    /// Config file. Defaults to <config_dir>/crashlab/crashlab.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record file (overrides the config).
    #[arg(long, global = true)]
    results: Option<PathBuf>,

    /// Seed for the prediction coin (overrides the config).
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a multiplier (e.g. 1.87, or 187 for percent form).
    Add {
        /// Raw multiplier text.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Delete every persisted record.
    Reset,
    /// Show latest balances and accuracy.
    Status {
        /// Print the full dashboard as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List records with both running balances, newest last.
    History {
        /// Only show the most recent N records.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export records and balance series as CSV.
    Export {
        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

type CliSession = Session<CsvRecordStore, CoinFlip>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CrashlabConfig::resolve(cli.config.as_deref())?
        .with_overrides(cli.results, cli.seed);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new(CsvRecordStore::new(&config.results_file), config.coin());

    match cli.command {
        Commands::Add { value } => run_add(&mut session, &value),
        Commands::Reset => run_reset(&mut session),
        Commands::Status { json } => run_status(&session, json),
        Commands::History { limit } => run_history(&session, limit),
        Commands::Export { output } => run_export(&session, output),
    }
}

fn run_add(session: &mut CliSession, value: &str) -> Result<()> {
    match session.submit(value) {
        Ok(submission) => {
            println!("{}", submission.message());
            Ok(())
        }
        Err(SessionError::InvalidInput) => {
            eprintln!("Invalid input.");
            std::process::exit(1);
        }
        Err(e) => Err(e).context("failed to record multiplier"),
    }
}

fn run_reset(session: &mut CliSession) -> Result<()> {
    session.reset().context("failed to reset records")?;
    println!("Data reset.");
    Ok(())
}

fn run_status(session: &CliSession, json: bool) -> Result<()> {
    let dashboard = session.dashboard().context("failed to load records")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }
    print!("{}", render_status(&dashboard));
    Ok(())
}

fn render_status(d: &Dashboard) -> String {
    if d.is_empty() {
        return "Add at least one multiplier to start tracking.\n".to_string();
    }
    let mut out = String::new();
    if let Some(flat) = d.series.latest_flat() {
        out.push_str(&format!("{:<20} {}\n", "Flat Balance", format_balance(flat)));
    }
    if let Some(mg) = d.series.latest_martingale() {
        out.push_str(&format!("{:<20} {}\n", "Martingale Balance", format_balance(mg)));
    }
    out.push_str(&format!("{:<20} {}\n", "Total Predictions", d.summary.total));
    out.push_str(&format!("{:<20} {}\n", "Correct Predictions", d.summary.correct));
    if let Some(pct) = d.summary.accuracy_pct() {
        out.push_str(&format!("{:<20} {}\n", "Accuracy", pct));
    }
    out
}

fn run_history(session: &CliSession, limit: Option<usize>) -> Result<()> {
    let records = session.records().context("failed to load records")?;
    print!("{}", render_history(&records, limit));
    Ok(())
}

/// History table, newest last. `limit` keeps only the most recent N rows;
/// row numbers stay absolute.
fn render_history(records: &[OutcomeRecord], limit: Option<usize>) -> String {
    if records.is_empty() {
        return "No records.\n".to_string();
    }
    let dashboard = Dashboard::from_records(records);
    let stakes = martingale_stakes(records);
    let skip = limit.map_or(0, |n| records.len().saturating_sub(n));

    let mut out = format!(
        "{:>5}  {:<6} {:>8}  {:<7} {:>9} {:>12} {:>12}\n",
        "#", "Pred", "Actual", "Result", "MG Stake", "Flat", "Martingale"
    );
    for (i, r) in records.iter().enumerate().skip(skip) {
        out.push_str(&format!(
            "{:>5}  {:<6} {:>8.2}  {:<7} {:>9.4} {:>12.4} {:>12.4}\n",
            i + 1,
            r.prediction(),
            r.actual(),
            r.verdict(),
            stakes[i],
            dashboard.series.flat[i],
            dashboard.series.martingale[i],
        ));
    }
    out
}

fn run_export(session: &CliSession, output: Option<PathBuf>) -> Result<()> {
    let records = session.records().context("failed to load records")?;
    let csv = export_series_csv(&records)?;
    match output {
        Some(path) => {
            std::fs::write(&path, csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), rows = records.len(), "exported series");
        }
        None => print!("{csv}"),
    }
    Ok(())
}
