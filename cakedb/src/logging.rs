//! Tracing setup shared by the cakedb command-line tools

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Environment variable consulted for the log level
pub const LOG_ENV: &str = "CAKEDB_LOG";

/// Map a level name to a tracing level, falling back to `WARN`.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::WARN,
    }
}

/// Install a compact stderr subscriber. Stdout is reserved for reports.
pub fn setup_logging(level: &str) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}
