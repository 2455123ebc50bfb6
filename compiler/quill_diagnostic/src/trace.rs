//! Tracing setup for front ends and tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_diagnostic=debug` or `RUST_LOG=quill_diagnostic=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Fails only when the host already installed a subscriber; keep theirs.
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
                .ok();
        }
    });
}
