//! Logging setup for hosts embedding the shim.

use tracing_subscriber::EnvFilter;

use crate::config::ShimConfig;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.log_filter` when set. Returns `false` if a
/// global subscriber was already installed, so repeated calls are harmless.
pub fn init(config: &ShimConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
