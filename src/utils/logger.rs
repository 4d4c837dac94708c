use std::env;
use std::sync::Once;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber once per process
///
/// The level is read from `LOGLEVEL` (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`,
/// case insensitive) and defaults to `INFO`. Calling it again is a no-op, and it
/// leaves an already installed subscriber in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(&env::var("LOGLEVEL").unwrap_or_default());

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}

/// Maps a level name to a `tracing::Level`, `INFO` for anything unknown
#[must_use]
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
