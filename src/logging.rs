//! Logging setup
//!
//! Log output goes to stderr so it never mixes with keycode output on
//! stdout. Filtering respects RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=camel_keymap::pad=trace` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialise the global subscriber
///
/// Without RUST_LOG the level is `warn`, or `debug` when `verbose` is set.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init();
}
