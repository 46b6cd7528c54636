//! compare-db CLI
//!
//! Loads two recipe databases and reports what changed between them.

use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

use cakedb::{load_database, logging};
use cakedb_diff::{
    report::{render_json, render_json_with_summary, render_text},
    DatabaseDiffer, DiffSummary, Result,
};

#[derive(Parser)]
#[command(name = "compare-db")]
#[command(about = "Compare two recipe databases (XML or JSON)", long_about = None)]
#[command(version)]
struct Cli {
    /// Original database file
    #[arg(long)]
    old: PathBuf,

    /// New database file
    #[arg(long)]
    new: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// When to color text output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Include per-kind counts (appended to text, nested in JSON)
    #[arg(long)]
    summary: bool,

    /// Exit with status 1 when the databases differ
    #[arg(long)]
    exit_code: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = logging::LOG_ENV, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(&self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level);

    // Both databases must load before anything is compared
    let old = load_database(&cli.old)?;
    let new = load_database(&cli.new)?;
    info!(
        "Comparing {:?} ({} recipes) with {:?} ({} recipes)",
        cli.old,
        old.len(),
        cli.new,
        new.len()
    );

    let events = DatabaseDiffer::new().diff(&old, &new);

    match cli.format {
        OutputFormat::Json if cli.summary => println!("{}", render_json_with_summary(&events)?),
        OutputFormat::Json => println!("{}", render_json(&events)?),
        OutputFormat::Text => {
            let color = cli.color.enabled();
            colored::control::set_override(color);
            print!("{}", render_text(&events, color));

            if cli.summary {
                if !events.is_empty() {
                    println!();
                }
                println!("{}", DiffSummary::from_events(&events));
            }
        }
    }

    if cli.exit_code && !events.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
