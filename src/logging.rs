//! Diagnostic logging to stderr.
//!
//! stdout carries tokens and decoded JSON, so the subscriber always
//! writes to stderr. Verbosity comes from the `-v` count only.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the `-v` count to a filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::new(level_for(verbosity));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(level = level_for(verbosity), "logging initialized");
    }
}
