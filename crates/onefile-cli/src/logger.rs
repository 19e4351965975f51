//! Logging setup for the CLI.
//!
//! The core library only emits `tracing` events; this installs the
//! subscriber. Verbosity order: `--verbose` beats `--quiet` beats `RUST_LOG`
//! beats the info default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("onefile=debug,onefile_cli=debug")
    } else if quiet {
        EnvFilter::new("onefile=error,onefile_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("onefile=info,onefile_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
