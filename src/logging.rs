//! Diagnostic logging.
//!
//! Progress lines for the user are printed by [`crate::output`] on stdout.
//! Everything else (skipped lines, image lookups, folder classification)
//! goes through `tracing` to stderr, filtered by `SIMPLE_RECIPES_LOG` or,
//! when that is unset, by the `-v` count.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SIMPLE_RECIPES_LOG";

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"`
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
