//! Diagnostic logging setup
//!
//! Library code emits `tracing` events; the binary installs a subscriber that
//! prints them to stderr. `RUST_LOG` takes precedence over the verbosity flag.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Default filter directive for a verbosity level (number of `-v` flags)
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "pennywise=warn",
        1 => "pennywise=info",
        2 => "pennywise=debug",
        _ => "pennywise=trace",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
