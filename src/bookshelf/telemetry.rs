//! Logging setup for the binary. The library only emits `tracing` events;
//! nothing is recorded unless a subscriber is installed here.

use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Overrides the level chosen from `-v` (e.g. `BOOKSHELF_LOG=bookshelf=trace`).
pub const LOG_ENV: &str = "BOOKSHELF_LOG";

/// Installs a stderr subscriber. Safe to call more than once; later calls are
/// ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = Registry::default().with(filter).with(layer).try_init();
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
