//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; command results are printed
//! to stdout by the command handlers.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` with
/// `--debug`. Calling this twice is a no-op.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
