//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! The level comes from `LOG_LEVEL` (via [`Environment`]) unless `RUST_LOG`
//! is set, which takes precedence for per-module filtering.
//!
//! Logs go to stderr so stdout stays free for the detect build plan.
//!
//! [`Environment`]: crate::config::Environment

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Initialise the global logging subscriber.
///
/// Call once at startup; later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
