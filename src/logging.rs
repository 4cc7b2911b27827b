//! Tracing setup for the binary
//!
//! The library only emits events; installing a subscriber is left to the
//! caller. Log output goes to stderr so reports on stdout stay clean.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, falling back
/// to `warn` if it does not parse.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing("expense_tracker=debug");
        init_tracing("not a [valid filter");
    }
}
