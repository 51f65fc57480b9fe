//! Shim configuration.

use keystone_engine::DispatcherConfig;
use serde::Deserialize;

/// Configuration for the runtime shim.
///
/// Controls input limits, the dispatcher's `init` keys, and the default
/// log filter. Loadable from JSON; omitted fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    /// Dispatcher configuration.
    pub dispatcher: DispatcherConfig,

    /// Maximum number of arguments after the function name.
    pub max_args: usize,

    /// Maximum length of the function name or any argument, in bytes.
    pub max_arg_len: usize,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            dispatcher: DispatcherConfig::default(),
            max_args: 16,
            max_arg_len: 64 * 1024, // 64 KiB
            log_filter: "info".to_string(),
        }
    }
}
