//! Dispatcher configuration.

use keystone_primitives::types::DEFAULT_INIT_KEY;
use serde::Deserialize;

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
///
/// Controls which keys `init` touches. Hosts may load it from JSON;
/// omitted fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Key that receives the `init` argument.
    pub init_key: String,

    /// Auxiliary index keys reset to an empty JSON list by `init`.
    /// Empty by default: no index schema is assumed.
    pub index_keys: Vec<String>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            init_key: DEFAULT_INIT_KEY.to_string(),
            index_keys: Vec::new(),
        }
    }
}

impl DispatcherConfig {
    /// Use `key` as the initialization marker.
    pub fn with_init_key(mut self, key: impl Into<String>) -> Self {
        self.init_key = key.into();
        self
    }

    /// Add an index key to reset on `init`.
    pub fn with_index_key(mut self, key: impl Into<String>) -> Self {
        self.index_keys.push(key.into());
        self
    }
}
