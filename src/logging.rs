//! Logging bootstrap for embedders without their own subscriber.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the default tracing subscriber for this process.
///
/// Honors `RUST_LOG`, falling back to `gallery=info`. Embedding shells that
/// already install a subscriber should skip this; a second call is a no-op.
pub fn initialize() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gallery=info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
