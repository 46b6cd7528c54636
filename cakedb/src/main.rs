//! read-db CLI
//!
//! Loads a recipe database and prints it in the other format
//! (XML becomes JSON, JSON becomes XML).

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cakedb::{load_database, logging, FormatKind, Result};

#[derive(Parser)]
#[command(name = "read-db")]
#[command(about = "Convert a recipe database between XML and JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Database file (.xml or .json)
    #[arg(short, long)]
    file: PathBuf,

    /// Output format (defaults to the opposite of the input format)
    #[arg(long, value_enum)]
    to: Option<FormatKind>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = logging::LOG_ENV, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level);

    let source = FormatKind::from_path(&cli.file)?;
    let target = cli.to.unwrap_or_else(|| source.counterpart());

    let recipes = load_database(&cli.file)?;
    info!("Converting {} recipes: {} -> {}", recipes.len(), source, target);

    println!("{}", target.render(&recipes)?);
    Ok(())
}
