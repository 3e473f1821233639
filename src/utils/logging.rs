//! Logging setup
//!
//! Installs a tracing subscriber for binaries and tests embedding the
//! engine. The engine itself only emits `tracing` events; wiring them to
//! an output is the embedder's choice.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize an env-filtered subscriber (RUST_LOG aware)
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
