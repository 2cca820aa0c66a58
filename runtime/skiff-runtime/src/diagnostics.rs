//! Runtime diagnostics.
//!
//! Logging is off unless the host sets `SKIFF_LOG` (an `EnvFilter`
//! directive string, e.g. `debug` or `skiff_std_mainloop=debug`). Output
//! goes to stderr so it never interleaves with guest console writes on
//! stdout.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call from every bootstrap; only
/// the first call does anything.
pub(crate) fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("SKIFF_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init();
    });
}
