//! compare-fs CLI
//!
//! Compares two filesystem snapshots (one path per line).

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use cakedb::logging;
use cakedb_fs::{compare, Result, Snapshot};

#[derive(Parser)]
#[command(name = "compare-fs")]
#[command(about = "Compare two filesystem snapshots", long_about = None)]
#[command(version)]
struct Cli {
    /// Old snapshot file
    #[arg(long)]
    old: PathBuf,

    /// New snapshot file
    #[arg(long)]
    new: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = logging::LOG_ENV, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level);

    let old = Snapshot::from_file(&cli.old)?;
    let new = Snapshot::from_file(&cli.new)?;

    let changes = compare(&old, &new);
    info!("{} paths changed", changes.len());

    for change in &changes {
        println!("{}", change);
    }
    Ok(())
}
