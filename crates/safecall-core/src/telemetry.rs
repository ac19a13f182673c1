//! Process-wide diagnostics setup
//!
//! Installs the global `tracing` subscriber once at process start. Library
//! code never calls this; binaries and demos do, before the first wrapper
//! invocation they want to observe.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// The filter comes from `RUST_LOG` when set and defaults to `info`
/// otherwise; fallback diagnostics are emitted at debug severity, so set
/// `RUST_LOG=safecall_core=debug` to see them. Calling this more than
/// once, or after another subscriber was installed, is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
